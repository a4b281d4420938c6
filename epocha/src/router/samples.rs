use std::sync::Arc;
use std::time::Duration;

use epocha_core::{
    EpochaError, FetchStrategy, PageCursor, SampleSequence, SampleSource, SignalKey, SourcePage,
    StateCode, Timestamp, collate_pages,
};

use crate::Epocha;

const CAPABILITY: &str = "samples";

/// Pages retrieved for one signal plus errors from sources that failed first.
pub(crate) type FetchedPages = (Vec<SourcePage>, Vec<EpochaError>);

/// A collated sample sequence plus errors from sources that failed first.
pub type FetchedSamples = (SampleSequence<Timestamp, StateCode>, Vec<EpochaError>);

/// Reduce the failures of every attempted source to one error for `signal`.
///
/// Uniform failures keep their kind (all timed out, all missing the signal);
/// anything mixed is returned whole as `AllSourcesFailed`.
fn exhausted(signal: &SignalKey, errors: Vec<EpochaError>) -> EpochaError {
    let uniform = |pred: fn(&EpochaError) -> bool| !errors.is_empty() && errors.iter().all(pred);
    if uniform(|e| matches!(e, EpochaError::SourceTimeout { .. })) {
        EpochaError::AllSourcesTimedOut {
            capability: CAPABILITY.to_string(),
        }
    } else if uniform(|e| matches!(e, EpochaError::NotFound { .. })) {
        EpochaError::not_found(format!("samples for {signal}"))
    } else {
        EpochaError::AllSourcesFailed(errors)
    }
}

impl Epocha {
    /// Follow page cursors on one source until the last page.
    async fn paginate(
        source: &Arc<dyn SampleSource>,
        signal: &SignalKey,
        timeout: Duration,
        max_pages: usize,
    ) -> Result<Vec<SourcePage>, EpochaError> {
        let mut pages: Vec<SourcePage> = Vec::new();
        let mut cursor: Option<PageCursor> = None;
        loop {
            if pages.len() >= max_pages {
                return Err(EpochaError::PageLimit {
                    signal: signal.to_string(),
                    limit: max_pages,
                });
            }
            let page = Self::source_call_with_timeout(
                source.name(),
                CAPABILITY,
                timeout,
                source.fetch_page(signal, cursor.as_ref()),
            )
            .await?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                source = source.name(),
                signal = %signal,
                page = pages.len(),
                records = page.records.len(),
                "fetched page"
            );

            cursor = page.next.clone();
            pages.push(page);
            if cursor.is_none() {
                return Ok(pages);
            }
        }
    }

    /// Retrieve every page of `signal` from the first source that can deliver
    /// all of them, honoring the configured fetch strategy.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "epocha::core::fetch_samples",
            skip(self, signal),
            fields(signal = %signal),
        )
    )]
    pub(crate) async fn fetch_pages(&self, signal: &SignalKey) -> Result<FetchedPages, EpochaError> {
        let eligible = self.eligible(signal);
        if eligible.is_empty() {
            return Err(EpochaError::unsupported(format!("{CAPABILITY}/{signal}")));
        }
        let timeout = self.cfg.source_timeout;
        let max_pages = self.cfg.max_pages;

        match self.cfg.fetch_strategy {
            FetchStrategy::PriorityWithFallback => {
                let mut errors: Vec<EpochaError> = Vec::new();
                for src in &eligible {
                    match Self::paginate(src, signal, timeout, max_pages).await {
                        Ok(pages) => return Ok((pages, errors)),
                        Err(e) => {
                            #[cfg(feature = "tracing")]
                            tracing::warn!(source = src.name(), error = %e, "source failed; falling back");
                            errors.push(crate::core::tag_err(src.name(), e));
                        }
                    }
                }
                Err(exhausted(signal, errors))
            }
            FetchStrategy::Latency => {
                use futures::stream::{FuturesUnordered, StreamExt};

                let mut futs = FuturesUnordered::new();
                for src in eligible {
                    futs.push(async move {
                        let res = Self::paginate(&src, signal, timeout, max_pages).await;
                        (src.name(), res)
                    });
                }
                let mut errors: Vec<EpochaError> = Vec::new();
                while let Some((name, res)) = futs.next().await {
                    match res {
                        Ok(pages) => return Ok((pages, errors)),
                        Err(e) => errors.push(crate::core::tag_err(name, e)),
                    }
                }
                Err(exhausted(signal, errors))
            }
        }
    }

    /// Fetch all pages of `signal` and collate `channel` into a validated
    /// sample sequence.
    ///
    /// Errors from sources that failed before the one that delivered are
    /// returned alongside the sequence, as [`Epocha::analyze`] reports them.
    ///
    /// # Errors
    /// - `Unsupported` when no registered source serves the signal.
    /// - Source failures collapse to `NotFound`, `AllSourcesTimedOut` or
    ///   `AllSourcesFailed`.
    /// - A `PageLimit` per source (inside the aggregate) when pagination
    ///   exceeds `max_pages`.
    /// - `InvalidInput` if the channel is absent or timestamps decrease.
    pub async fn fetch_samples(
        &self,
        signal: &SignalKey,
        channel: &str,
    ) -> Result<FetchedSamples, EpochaError> {
        let (pages, warnings) = self.fetch_pages(signal).await?;
        Ok((collate_pages(pages, channel)?, warnings))
    }
}
