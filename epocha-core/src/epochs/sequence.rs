use core::fmt::Debug;

use epocha_types::{Epoch, EpochaError, Sample};
use serde::Serialize;

/// Ensure timestamps never decrease. Equal neighbours are allowed.
///
/// # Errors
/// Returns `EpochaError::InvalidInput` naming the first offending index and
/// both timestamps.
pub fn ensure_non_decreasing<T, V>(samples: &[Sample<T, V>]) -> Result<(), EpochaError>
where
    T: Ord + Copy + Debug,
{
    for (i, pair) in samples.windows(2).enumerate() {
        if pair[1].ts < pair[0].ts {
            return Err(EpochaError::invalid_input(format!(
                "sample {} at {:?} precedes sample {i} at {:?}; timestamps must be non-decreasing",
                i + 1,
                pair[1].ts,
                pair[0].ts
            )));
        }
    }
    Ok(())
}

/// A validated, time-ordered run of samples for one signal.
///
/// Holds at least one sample and its timestamps never decrease. The
/// sequence is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SampleSequence<T, V> {
    samples: Vec<Sample<T, V>>,
}

impl<T, V> SampleSequence<T, V>
where
    T: Ord + Copy + Debug,
{
    /// Validate and wrap `samples`.
    ///
    /// # Errors
    /// Returns `EpochaError::InvalidInput` if `samples` is empty or out of order.
    pub fn new(samples: Vec<Sample<T, V>>) -> Result<Self, EpochaError> {
        if samples.is_empty() {
            return Err(EpochaError::invalid_input(
                "sample sequence is empty; at least one sample is required",
            ));
        }
        ensure_non_decreasing(&samples)?;
        Ok(Self { samples })
    }

    /// Samples in temporal order.
    #[must_use]
    pub fn samples(&self) -> &[Sample<T, V>] {
        &self.samples
    }

    /// Number of samples (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamp of the first sample.
    #[must_use]
    pub fn first_ts(&self) -> T {
        self.samples[0].ts
    }

    /// Timestamp of the last sample.
    #[must_use]
    pub fn last_ts(&self) -> T {
        self.samples[self.samples.len() - 1].ts
    }

    /// Consume the sequence, returning the samples.
    #[must_use]
    pub fn into_inner(self) -> Vec<Sample<T, V>> {
        self.samples
    }
}

impl<T, V> SampleSequence<T, V>
where
    T: Ord + Copy + Debug,
    V: PartialEq,
{
    /// Epochs during which the sequence held `target`.
    ///
    /// # Errors
    /// Never fails for a constructed sequence; the signature mirrors
    /// [`detect_epochs`](super::detect::detect_epochs).
    pub fn epochs(&self, target: &V) -> Result<Vec<Epoch<T>>, EpochaError> {
        super::detect::detect_epochs(&self.samples, target)
    }
}

impl<T, V> AsRef<[Sample<T, V>]> for SampleSequence<T, V> {
    fn as_ref(&self) -> &[Sample<T, V>] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        let err = SampleSequence::<i64, i64>::new(vec![]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn rejects_decreasing_and_names_the_index() {
        let err = SampleSequence::new(vec![
            Sample::new(1, 0),
            Sample::new(3, 0),
            Sample::new(2, 1),
        ])
        .unwrap_err();
        match err {
            EpochaError::InvalidInput(m) => assert!(m.starts_with("sample 2 at 2"), "{m}"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn equal_timestamps_are_allowed() {
        let seq = SampleSequence::new(vec![Sample::new(1, 0), Sample::new(1, 1)]).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!((seq.first_ts(), seq.last_ts()), (1, 1));
    }
}
