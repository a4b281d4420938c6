//! Configuration types for the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Strategy for selecting among sources that serve a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchStrategy {
    /// Use registration order and fall back to the next source on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible sources concurrently and keep the first full success.
    Latency,
}

/// Global configuration for the `Epocha` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochaConfig {
    /// Timeout for each individual page request.
    pub source_timeout: Duration,
    /// Optional deadline for a whole analysis (all signals plus intersection).
    pub request_timeout: Option<Duration>,
    /// Maximum number of pages followed for one signal before giving up.
    pub max_pages: usize,
    /// Strategy for fetching from multiple sources.
    pub fetch_strategy: FetchStrategy,
}

impl Default for EpochaConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(5),
            request_timeout: None,
            max_pages: 1000,
            fetch_strategy: FetchStrategy::default(),
        }
    }
}
