use core::fmt::Debug;

use epocha_types::{Epoch, EpochaError, Sample};

use super::sequence::ensure_non_decreasing;

/// Derive the epochs during which a signal held `target`.
///
/// Walks the samples once. A run of matching samples opens an epoch at the
/// first matching timestamp (a match at index 0 opens one immediately) and
/// closes it at the timestamp of the first non-matching sample after the
/// run, so `end` marks where the state was first seen to stop holding. A run
/// still open when the samples run out is closed at the last sample's
/// timestamp; a single trailing match therefore yields the instant `(t, t)`,
/// which is kept.
///
/// Epochs come out sorted by start, non-overlapping and maximal: each one
/// ends strictly before the next begins. Repeated timestamps are allowed;
/// when a run reopens at the timestamp where the previous epoch closed, the
/// two are merged. A run that opens and closes at one repeated timestamp
/// yields the instant `(t, t)`. No matches is an empty `Vec`, not an error.
///
/// ```
/// use epocha_core::{detect_epochs, Epoch, Sample};
///
/// let samples: Vec<Sample<i64, i64>> =
///     vec![(1, 1).into(), (2, 1).into(), (3, 0).into(), (4, 1).into(), (5, 0).into()];
/// let epochs = detect_epochs(&samples, &1).unwrap();
/// assert_eq!(epochs, vec![Epoch::new(1, 3).unwrap(), Epoch::new(4, 5).unwrap()]);
/// ```
///
/// # Errors
/// Returns `EpochaError::InvalidInput` if `samples` is empty or a timestamp
/// is smaller than its predecessor. Unordered input is never re-sorted.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "epocha_core::detect_epochs",
        skip(samples, target),
        fields(samples = samples.len()),
    )
)]
pub fn detect_epochs<T, V>(samples: &[Sample<T, V>], target: &V) -> Result<Vec<Epoch<T>>, EpochaError>
where
    T: Ord + Copy + Debug,
    V: PartialEq,
{
    let Some(last) = samples.last() else {
        return Err(EpochaError::invalid_input(
            "sample sequence is empty; at least one sample is required",
        ));
    };
    ensure_non_decreasing(samples)?;

    let mut out: Vec<Epoch<T>> = Vec::new();
    let mut open: Option<T> = None;
    for s in samples {
        let matching = s.value == *target;
        match (open, matching) {
            (None, true) => {
                // A run reopening at the timestamp its predecessor closed on
                // continues that epoch, so runs stay maximal.
                let reopens = out.last().is_some_and(|prev| prev.end() == s.ts);
                open = if reopens {
                    out.pop().map(|prev| prev.start())
                } else {
                    Some(s.ts)
                };
            }
            (Some(start), false) => {
                out.push(Epoch::new(start, s.ts)?);
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        out.push(Epoch::new(start, last.ts)?);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(epochs = out.len(), "detected epochs");

    Ok(out)
}
