//! Epocha derives the time intervals during which signals hold a state, and
//! where several signals hold theirs at once.
//!
//! Overview
//! - Retrieves paginated, multi-channel samples from registered
//!   [`SampleSource`]s, with per-page timeouts and source fallback.
//! - Collates pages into a validated sample sequence for one channel.
//! - Detects epochs per signal (run-length scan) and intersects them across
//!   signals (coordinate sweep) using `epocha_core`.
//! - Hands labelled rows to a [`TimelineRenderer`].
//!
//! Key behaviors and trade-offs
//! - Epoch ends mark the first sample at which the state stopped holding, so
//!   epochs read as `[start, end)`; touching epochs of two signals do not
//!   overlap.
//! - Inputs are validated eagerly and never re-sorted: out-of-order
//!   timestamps fail with `InvalidInput` instead of being silently repaired.
//! - Fetch strategy:
//!   - `PriorityWithFallback`: one source at a time in registration order;
//!     economical, failures before the success become report warnings.
//!   - `Latency`: races eligible sources; lower latency, more upstream load.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use epocha::{Epocha, SignalQuery};
//!
//! let epocha = Epocha::builder()
//!     .with_source(Arc::new(AvailabilityApi::new(base_url)))
//!     .build()?;
//!
//! let report = epocha
//!     .analyze(&[
//!         SignalQuery::new("station-a", "data", 1),
//!         SignalQuery::new("station-b", "data", 1),
//!     ])
//!     .await?;
//! if report.is_empty() {
//!     println!("no epochs satisfy all conditions");
//! }
//! for e in &report.combined {
//!     println!("{} .. {}", e.start(), e.end());
//! }
//! ```
//!
//! See `epocha/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Epocha, EpochaBuilder};
pub use router::samples::FetchedSamples;

// Re-export core types for convenience
pub use epocha_core::{
    AnalysisReport, COMBINED_LABEL, Condition, Epoch, EpochaConfig, EpochaError, FetchStrategy,
    PageCursor, Record, Sample, SamplePage, SampleSequence, SampleSource, SignalKey, SignalQuery,
    SourcePage, StateCode, TimelineRenderer, TimelineRow, Timestamp, collate_pages,
    detect_epochs, intersect_epochs,
};
