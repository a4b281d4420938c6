//! epocha-core
//!
//! Epoch detection and intersection over time-stamped state samples.
//!
//! - `epochs`: the two core algorithms plus sample validation and page collation.
//! - `source`: the `SampleSource` and `TimelineRenderer` collaborator traits.
//!
//! Both algorithms are pure, synchronous functions of their inputs. They keep
//! no state between calls, so callers may run detections for several signals
//! concurrently before intersecting the results.
#![warn(missing_docs)]

/// Epoch detection, intersection and sample sequence helpers.
pub mod epochs;
/// Collaborator traits for sample retrieval and rendering.
pub mod source;

pub use epochs::collate::collate_pages;
pub use epochs::detect::detect_epochs;
pub use epochs::intersect::intersect_epochs;
pub use epochs::sequence::{SampleSequence, ensure_non_decreasing};
pub use source::{SampleSource, SourcePage, TimelineRenderer, Timestamp};

pub use epocha_types::{
    AnalysisReport, COMBINED_LABEL, Condition, Epoch, EpochaConfig, EpochaError, FetchStrategy,
    PageCursor, Record, Sample, SamplePage, SignalKey, SignalQuery, StateCode, TimelineRow,
};
