use epocha_core::{Condition, EpochaError, Sample, detect_epochs, intersect_epochs};

#[test]
fn empty_samples_are_invalid_input() {
    let samples: Vec<Sample<i64, i64>> = vec![];
    let err = detect_epochs(&samples, &1).unwrap_err();
    assert!(matches!(err, EpochaError::InvalidInput(_)));
    assert!(!err.is_retryable());
}

#[test]
fn non_monotonic_samples_are_rejected_not_sorted() {
    let samples = [Sample::new(1, 1), Sample::new(3, 0), Sample::new(2, 1)];
    match detect_epochs(&samples, &1) {
        Err(EpochaError::InvalidInput(m)) => {
            assert!(m.contains("sample 2"), "{m}");
            assert!(m.contains("non-decreasing"), "{m}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn zero_conditions_are_invalid_input() {
    let none: [Condition<i64>; 0] = [];
    assert!(matches!(
        intersect_epochs(&none),
        Err(EpochaError::InvalidInput(_))
    ));
}

#[test]
fn empty_intersection_is_not_an_error() {
    let a: Condition<i64> = Condition::never("a");
    let b = Condition::never("b");
    assert!(intersect_epochs(&[a, b]).unwrap().is_empty());
}
