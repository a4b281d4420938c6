//! Mock sample source and renderer for CI-safe tests and examples.
//!
//! Fixture signals: `station-a`, `station-b`, `station-c` (hourly `data` and
//! `qc` channels) and `offline` (never available). The special signals
//! `FAIL` and `TIMEOUT` exercise error handling in the orchestrator.
use std::sync::Mutex;

use async_trait::async_trait;
use epocha_core::{
    EpochaError, PageCursor, SampleSource, SamplePage, SignalKey, SourcePage, TimelineRenderer,
    TimelineRow,
};

mod fixtures;

pub use fixtures::availability::{bin, origin};

/// Mock source serving deterministic fixtures split into fixed-size pages.
pub struct MockSource {
    page_size: usize,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// A source returning four records per page.
    #[must_use]
    pub const fn new() -> Self {
        Self { page_size: 4 }
    }

    /// A source returning `page_size` records per page (at least one).
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    async fn maybe_fail_or_timeout(signal: &str) -> Result<(), EpochaError> {
        match signal {
            "FAIL" => Err(EpochaError::source("epocha-mock", "forced failure: samples")),
            "TIMEOUT" => {
                // Long enough for any sensible source timeout to fire first.
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn page_index(cursor: Option<&PageCursor>) -> Result<usize, EpochaError> {
        cursor.map_or(Ok(0), |c| {
            c.0.strip_prefix("page-")
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| EpochaError::source("epocha-mock", format!("bad cursor: {}", c.0)))
        })
    }
}

#[async_trait]
impl SampleSource for MockSource {
    fn name(&self) -> &'static str {
        "epocha-mock"
    }

    async fn fetch_page(
        &self,
        signal: &SignalKey,
        cursor: Option<&PageCursor>,
    ) -> Result<SourcePage, EpochaError> {
        let s = signal.as_str();
        Self::maybe_fail_or_timeout(s).await?;
        let records = fixtures::availability::by_signal(s)
            .ok_or_else(|| EpochaError::not_found(format!("samples for {s}")))?;

        let idx = Self::page_index(cursor)?;
        let start = idx.saturating_mul(self.page_size);
        if start >= records.len() && idx > 0 {
            return Err(EpochaError::source(
                "epocha-mock",
                format!("cursor page-{idx} past end of {s}"),
            ));
        }
        let end = (start + self.page_size).min(records.len());
        let next = (end < records.len()).then(|| PageCursor(format!("page-{}", idx + 1)));
        Ok(SamplePage {
            records: records[start..end].to_vec(),
            next,
        })
    }
}

/// Renderer that records every set of rows it is given.
pub struct RecordingRenderer<T> {
    calls: Mutex<Vec<Vec<TimelineRow<T>>>>,
}

impl<T: Clone> Default for RecordingRenderer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> RecordingRenderer<T> {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Rows passed to each `render` call, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<TimelineRow<T>>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl<T: Clone> TimelineRenderer<T> for RecordingRenderer<T> {
    fn render(&self, rows: &[TimelineRow<T>]) -> Result<(), EpochaError> {
        self.calls
            .lock()
            .map_err(|_| EpochaError::Render("recorder poisoned".into()))?
            .push(rows.to_vec());
        Ok(())
    }
}
