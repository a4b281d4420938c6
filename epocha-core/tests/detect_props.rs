use epocha_core::{Condition, Epoch, Sample, detect_epochs};
use proptest::prelude::*;

// Non-decreasing timestamps; zero gaps repeat a timestamp.
fn arb_samples() -> impl Strategy<Value = Vec<Sample<i64, i64>>> {
    proptest::collection::vec((0i64..4i64, 0i64..3i64), 1..120).prop_map(|steps| {
        let mut ts = -50i64;
        steps
            .into_iter()
            .map(|(gap, v)| {
                ts += gap;
                Sample::new(ts, v)
            })
            .collect()
    })
}

fn within(e: &Epoch<i64>, t: i64) -> bool {
    e.start() <= t && t <= e.end()
}

proptest! {
    #[test]
    fn epochs_sorted_and_maximal(samples in arb_samples(), target in 0i64..3i64) {
        let epochs = detect_epochs(&samples, &target).unwrap();
        for e in &epochs {
            prop_assert!(e.start() <= e.end());
        }
        for pair in epochs.windows(2) {
            // Epochs touching end-to-start would be one run.
            prop_assert!(pair[0].end() < pair[1].start());
        }
        // Output is always a valid condition.
        prop_assert!(Condition::new("detected", epochs).is_ok());
    }

    #[test]
    fn detection_is_idempotent(samples in arb_samples(), target in 0i64..3i64) {
        let once = detect_epochs(&samples, &target).unwrap();
        let twice = detect_epochs(&samples, &target).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn matching_samples_are_covered_exactly_once(samples in arb_samples(), target in 0i64..3i64) {
        let epochs = detect_epochs(&samples, &target).unwrap();
        for (i, s) in samples.iter().enumerate() {
            let shares_ts_with_match = samples.iter().any(|o| o.ts == s.ts && o.value == target);
            if s.value == target {
                let hits = epochs.iter().filter(|e| within(e, s.ts)).count();
                prop_assert_eq!(hits, 1, "matching sample {} at {} covered {} times", i, s.ts, hits);
            } else if !shares_ts_with_match {
                // Non-matching samples may only sit on an epoch's end.
                let inside = epochs.iter().any(|e| e.start() <= s.ts && s.ts < e.end());
                prop_assert!(!inside, "non-matching sample {} at {} inside an epoch", i, s.ts);
            }
        }
    }

    #[test]
    fn epoch_ends_are_first_non_matching_or_last(samples in arb_samples(), target in 0i64..3i64) {
        let epochs = detect_epochs(&samples, &target).unwrap();
        let last_ts = samples.last().unwrap().ts;
        for e in &epochs {
            let closed_by_mismatch = samples.iter().any(|s| s.ts == e.end() && s.value != target);
            prop_assert!(closed_by_mismatch || e.end() == last_ts);
            prop_assert!(samples.iter().any(|s| s.ts == e.start() && s.value == target));
        }
    }

    #[test]
    fn instants_only_at_repeated_or_last_timestamps(samples in arb_samples(), target in 0i64..3i64) {
        let epochs = detect_epochs(&samples, &target).unwrap();
        let last_ts = samples.last().unwrap().ts;
        for e in epochs.iter().filter(|e| e.is_instant()) {
            let repeats = samples.iter().filter(|s| s.ts == e.start()).count();
            prop_assert!(e.start() == last_ts || repeats > 1);
        }
    }
}

#[test]
fn repeated_timestamps_merge_into_one_epoch() {
    let samples: Vec<Sample<i64, i64>> =
        vec![(5, 1).into(), (5, 0).into(), (5, 1).into(), (5, 0).into()];
    let epochs = detect_epochs(&samples, &1).unwrap();
    assert_eq!(epochs, vec![Epoch::instant(5)]);
    assert_eq!(
        epocha_core::intersect_epochs(&[Condition::new("a", epochs.clone()).unwrap()]).unwrap(),
        epochs
    );
}

#[test]
fn scenario_two_runs() {
    let samples: Vec<Sample<i64, i64>> = vec![
        (1, 1).into(),
        (2, 1).into(),
        (3, 0).into(),
        (4, 1).into(),
        (5, 0).into(),
    ];
    let epochs = detect_epochs(&samples, &1).unwrap();
    assert_eq!(
        epochs,
        vec![Epoch::new(1, 3).unwrap(), Epoch::new(4, 5).unwrap()]
    );
}

#[test]
fn scenario_no_match_is_empty_not_error() {
    let samples: Vec<Sample<i64, i64>> = vec![(1, 0).into(), (2, 0).into()];
    assert!(detect_epochs(&samples, &1).unwrap().is_empty());
}

#[test]
fn boolean_values() {
    let samples = [
        Sample::new(0, false),
        Sample::new(1, true),
        Sample::new(2, false),
    ];
    let epochs = detect_epochs(&samples, &true).unwrap();
    assert_eq!(epochs, vec![Epoch::new(1, 2).unwrap()]);
}
