//! Samples and the paginated records they are collated from.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// State code used by the orchestrator: `0`/`1` for boolean availability
/// flags, small integers for categorical states.
pub type StateCode = i64;

/// One observation of a signal: its state `value` at time `ts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample<T, V> {
    /// Observation timestamp.
    pub ts: T,
    /// Observed state.
    pub value: V,
}

impl<T, V> Sample<T, V> {
    /// Construct a sample.
    pub const fn new(ts: T, value: V) -> Self {
        Self { ts, value }
    }
}

impl<T, V> From<(T, V)> for Sample<T, V> {
    fn from((ts, value): (T, V)) -> Self {
        Self { ts, value }
    }
}

/// Key naming a remote signal, e.g. a station or data product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalKey(String);

impl SignalKey {
    /// Construct a signal key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SignalKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque continuation token returned by a paginated source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(pub String);

/// One multi-channel row of a retrieved page.
///
/// Sources return every channel they observed for a time bin; the collator
/// picks the one channel a query is interested in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<T, V> {
    /// Time bin of the row.
    pub ts: T,
    /// Observed values keyed by channel name.
    pub values: BTreeMap<String, V>,
}

impl<T, V> Record<T, V> {
    /// Build a record from `(channel, value)` pairs.
    pub fn new<I, K>(ts: T, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        Self {
            ts,
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A page of records plus the cursor for the next page, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePage<T, V> {
    /// Records in retrieval order.
    pub records: Vec<Record<T, V>>,
    /// Cursor for the following page; `None` on the last page.
    pub next: Option<PageCursor>,
}

impl<T, V> SamplePage<T, V> {
    /// A final page (no continuation).
    #[must_use]
    pub const fn last(records: Vec<Record<T, V>>) -> Self {
        Self {
            records,
            next: None,
        }
    }
}
