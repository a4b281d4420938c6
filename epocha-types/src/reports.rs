//! Report envelopes produced by the orchestrator and consumed by renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::epoch::{Condition, Epoch};
use crate::error::EpochaError;

/// Label given to the combined row in [`AnalysisReport::timeline_rows`].
pub const COMBINED_LABEL: &str = "all";

/// One labelled row of a timeline: what a renderer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Ord + Copy + fmt::Debug"))]
pub struct TimelineRow<T> {
    /// Row label.
    pub label: String,
    /// Epochs drawn on the row.
    pub epochs: Vec<Epoch<T>>,
}

/// Outcome of one multi-signal analysis.
///
/// Carries the per-signal conditions that were detected, the epochs during
/// which all of them held at once, and any non-fatal `warnings` collected
/// while fetching (e.g. a source that failed before a fallback succeeded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Ord + Copy + fmt::Debug"))]
pub struct AnalysisReport<T> {
    /// Detected condition per query, in query order.
    pub conditions: Vec<Condition<T>>,
    /// Epochs during which every condition held.
    pub combined: Vec<Epoch<T>>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<EpochaError>,
}

impl<T: Clone> AnalysisReport<T> {
    /// True when no epoch satisfies all conditions. This is a valid outcome,
    /// not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Rows for a timeline renderer: one per condition, then the combined row.
    #[must_use]
    pub fn timeline_rows(&self) -> Vec<TimelineRow<T>> {
        self.conditions
            .iter()
            .map(|c| TimelineRow {
                label: c.label().to_string(),
                epochs: c.epochs().to_vec(),
            })
            .chain(std::iter::once(TimelineRow {
                label: COMBINED_LABEL.to_string(),
                epochs: self.combined.clone(),
            }))
            .collect()
    }
}
