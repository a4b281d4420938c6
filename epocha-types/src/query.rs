//! Analysis queries: which signal, which channel, which state.

use serde::{Deserialize, Serialize};

use crate::sample::{SignalKey, StateCode};

/// One condition of a multi-signal analysis.
///
/// Selects `channel` from the records of `signal` and asks when it equals
/// `target`. The `label` names the resulting condition in reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalQuery {
    /// Name of the resulting condition.
    pub label: String,
    /// Remote signal to fetch.
    pub signal: SignalKey,
    /// Channel selected from each record.
    pub channel: String,
    /// State the channel must hold.
    pub target: StateCode,
}

impl SignalQuery {
    /// Query `channel` of `signal` for `target`, labelled `"{signal}/{channel}"`.
    pub fn new(signal: impl Into<String>, channel: impl Into<String>, target: StateCode) -> Self {
        let signal = SignalKey::new(signal);
        let channel = channel.into();
        Self {
            label: format!("{signal}/{channel}"),
            signal,
            channel,
            target,
        }
    }

    /// Replace the label.
    #[must_use]
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
