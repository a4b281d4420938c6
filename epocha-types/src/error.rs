use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the epocha workspace.
///
/// The first two variants cover the epoch core: precondition violations on the
/// inputs and a sweep that could not close cleanly. The remaining variants are
/// raised around the core by sample sources, the orchestrator and renderers.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EpochaError {
    /// An input violated a precondition (ordering, emptiness, arity, bounds).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The intersection sweep finished in a state bounded inputs cannot produce.
    #[error("inconsistent state: {0}")]
    InconsistentState(String),

    /// The requested capability is not provided by any registered source.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "samples/station-7").
        capability: String,
    },

    /// An individual sample source returned an error.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A signal or page could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "samples for station-7".
        what: String,
    },

    /// All attempted sources failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<EpochaError>),

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {capability} via {source_name}")]
    SourceTimeout {
        /// Source name that timed out.
        source_name: String,
        /// Capability label (e.g. "samples").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// All attempted sources timed out for the requested capability.
    #[error("all sources timed out: {capability}")]
    AllSourcesTimedOut {
        /// Capability label that timed out across all sources.
        capability: String,
    },

    /// Pagination did not terminate within the configured page budget.
    #[error("page limit of {limit} reached while fetching {signal}")]
    PageLimit {
        /// Signal being paginated.
        signal: String,
        /// Configured maximum number of pages.
        limit: usize,
    },

    /// A timeline renderer rejected its rows.
    #[error("render failed: {0}")]
    Render(String),
}

impl EpochaError {
    /// Helper: build an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build an `InconsistentState` error.
    pub fn inconsistent_state(msg: impl Into<String>) -> Self {
        Self::InconsistentState(msg.into())
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(source_name: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::SourceTimeout {
            source_name: source_name.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true for precondition violations raised by the epoch core.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns true if repeating the same call could succeed.
    ///
    /// Input and state errors are deterministic and stay failed until the
    /// input is corrected. Aggregates are retryable if any member is.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::InvalidInput(_)
            | Self::InconsistentState(_)
            | Self::Unsupported { .. }
            | Self::PageLimit { .. } => false,
            Self::AllSourcesFailed(inner) => inner.iter().any(Self::is_retryable),
            _ => true,
        }
    }

    /// Flatten nested `AllSourcesFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSourcesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
