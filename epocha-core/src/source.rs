use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::EpochaError;
use epocha_types::{PageCursor, SamplePage, SignalKey, StateCode, TimelineRow};

/// Timestamp type used by remote sample sources.
pub type Timestamp = DateTime<Utc>;

/// A page as returned by a [`SampleSource`].
pub type SourcePage = SamplePage<Timestamp, StateCode>;

/// A remote, paginated provider of time-binned state samples.
///
/// Implementations fetch one page per call. The orchestrator follows
/// `SamplePage::next` until it is `None`, so a source only needs to know how
/// to turn a cursor into the following page.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Stable identifier used in errors and logs (e.g. "availability-api").
    fn name(&self) -> &'static str;

    /// Whether this source can serve `signal`. Defaults to `true`; sources
    /// with a fixed catalogue override it so the orchestrator can skip them.
    fn serves(&self, _signal: &SignalKey) -> bool {
        true
    }

    /// Fetch the page following `cursor` (the first page when `None`).
    async fn fetch_page(
        &self,
        signal: &SignalKey,
        cursor: Option<&PageCursor>,
    ) -> Result<SourcePage, EpochaError>;
}

/// Consumer of labelled epoch rows, e.g. a timeline chart.
pub trait TimelineRenderer<T> {
    /// Draw the rows.
    ///
    /// # Errors
    /// Implementations return `EpochaError::Render` when the rows cannot be drawn.
    fn render(&self, rows: &[TimelineRow<T>]) -> Result<(), EpochaError>;
}
