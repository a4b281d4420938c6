//! Epochs and conditions: the interval types produced and consumed by the core.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EpochaError;

/// A time interval `(start, end)` during which a signal held its target state.
///
/// `end` is the timestamp at which the state was first observed to stop
/// holding (or the last observed sample if the run never ended), so the
/// interval reads as half-open `[start, end)`. An epoch with `start == end` is
/// an instant: the state held at exactly one observed timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "EpochRepr<T>",
    bound(deserialize = "T: Deserialize<'de> + Ord + Copy + fmt::Debug")
)]
pub struct Epoch<T> {
    start: T,
    end: T,
}

#[derive(Deserialize)]
struct EpochRepr<T> {
    start: T,
    end: T,
}

impl<T: Ord + Copy + fmt::Debug> TryFrom<EpochRepr<T>> for Epoch<T> {
    type Error = EpochaError;

    fn try_from(r: EpochRepr<T>) -> Result<Self, Self::Error> {
        Self::new(r.start, r.end)
    }
}

impl<T: Ord + Copy + fmt::Debug> Epoch<T> {
    /// Build an epoch, rejecting `end < start`.
    ///
    /// # Errors
    /// Returns `EpochaError::InvalidInput` if `end` precedes `start`.
    pub fn new(start: T, end: T) -> Result<Self, EpochaError> {
        if end < start {
            return Err(EpochaError::invalid_input(format!(
                "epoch end {end:?} precedes start {start:?}"
            )));
        }
        Ok(Self { start, end })
    }
}

impl<T: Copy> Epoch<T> {
    /// Build an epoch covering the single instant `t`.
    #[must_use]
    pub const fn instant(t: T) -> Self {
        Self { start: t, end: t }
    }

    /// Start of the epoch (inclusive).
    #[must_use]
    pub const fn start(&self) -> T {
        self.start
    }

    /// End of the epoch: first timestamp at which the state no longer held.
    #[must_use]
    pub const fn end(&self) -> T {
        self.end
    }
}

impl<T: Ord + Copy> Epoch<T> {
    /// True for zero-width epochs (`start == end`).
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Whether `t` lies inside the epoch.
    ///
    /// Regular epochs are half-open `[start, end)`; an instant contains only
    /// its own timestamp.
    #[must_use]
    pub fn contains(&self, t: T) -> bool {
        if self.is_instant() {
            t == self.start
        } else {
            self.start <= t && t < self.end
        }
    }

    /// True if both epochs share at least one instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }
}

impl<T: fmt::Display> fmt::Display for Epoch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A labelled, ordered list of epochs describing when one signal held its state.
///
/// Epochs are sorted by start and do not overlap: each epoch ends no later
/// than the next one starts. Construction validates this so the intersector
/// can rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "ConditionRepr<T>",
    bound(deserialize = "T: Deserialize<'de> + Ord + Copy + fmt::Debug")
)]
pub struct Condition<T> {
    label: String,
    epochs: Vec<Epoch<T>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Ord + Copy + fmt::Debug"))]
struct ConditionRepr<T> {
    label: String,
    epochs: Vec<Epoch<T>>,
}

impl<T: Ord + Copy + fmt::Debug> TryFrom<ConditionRepr<T>> for Condition<T> {
    type Error = EpochaError;

    fn try_from(r: ConditionRepr<T>) -> Result<Self, Self::Error> {
        Self::new(r.label, r.epochs)
    }
}

impl<T: Ord + Copy + fmt::Debug> Condition<T> {
    /// Build a condition from epochs that are already in order.
    ///
    /// # Errors
    /// Returns `EpochaError::InvalidInput` naming the condition and the index
    /// of the first epoch that starts before its predecessor ends.
    pub fn new(label: impl Into<String>, epochs: Vec<Epoch<T>>) -> Result<Self, EpochaError> {
        let label = label.into();
        for (i, pair) in epochs.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start < prev.end {
                return Err(EpochaError::invalid_input(format!(
                    "condition '{label}': epoch {} starting at {:?} overlaps or precedes epoch {i} ending at {:?}",
                    i + 1,
                    next.start,
                    prev.end
                )));
            }
        }
        Ok(Self { label, epochs })
    }
}

impl<T> Condition<T> {
    /// A condition that never holds.
    pub fn never(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            epochs: Vec::new(),
        }
    }

    /// Label used when reporting or rendering the condition.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Epochs in start order.
    #[must_use]
    pub fn epochs(&self) -> &[Epoch<T>] {
        &self.epochs
    }

    /// True if the condition never holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Consume the condition, returning its epochs.
    #[must_use]
    pub fn into_epochs(self) -> Vec<Epoch<T>> {
        self.epochs
    }
}
