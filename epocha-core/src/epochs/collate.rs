use core::fmt::Debug;

use epocha_types::{EpochaError, Sample, SamplePage};

use super::sequence::SampleSequence;

/// Assemble retrieved pages into one sample sequence for a single channel.
///
/// - Pages are concatenated in retrieval order; records keep their order
///   within a page.
/// - Each record contributes the value of `channel`. Records that did not
///   observe the channel are skipped: nothing is filled in for them.
/// - Timestamps must not decrease, including across page seams.
///
/// # Errors
/// Returns `EpochaError::InvalidInput` if no record carries `channel` or if
/// the assembled timestamps decrease anywhere.
pub fn collate_pages<T, V, I>(pages: I, channel: &str) -> Result<SampleSequence<T, V>, EpochaError>
where
    T: Ord + Copy + Debug,
    I: IntoIterator<Item = SamplePage<T, V>>,
{
    let mut samples: Vec<Sample<T, V>> = Vec::new();
    let mut skipped: usize = 0;
    for page in pages {
        for mut r in page.records {
            match r.values.remove(channel) {
                Some(value) => samples.push(Sample::new(r.ts, value)),
                None => skipped += 1,
            }
        }
    }

    if samples.is_empty() {
        return Err(EpochaError::invalid_input(format!(
            "no samples for channel '{channel}' ({skipped} records without it)"
        )));
    }

    #[cfg(feature = "tracing")]
    {
        if skipped > 0 {
            tracing::debug!(channel, skipped, "records without channel skipped");
        }
    }

    SampleSequence::new(samples)
}
