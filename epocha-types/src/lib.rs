//! Epocha data transfer objects: samples, epochs, conditions, reports and configuration.
#![warn(missing_docs)]

mod config;
mod epoch;
mod error;
mod query;
mod reports;
mod sample;

pub use config::{EpochaConfig, FetchStrategy};
pub use epoch::{Condition, Epoch};
pub use error::EpochaError;
pub use query::SignalQuery;
pub use reports::{AnalysisReport, COMBINED_LABEL, TimelineRow};
pub use sample::{PageCursor, Record, Sample, SamplePage, SignalKey, StateCode};
