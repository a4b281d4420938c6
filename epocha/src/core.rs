use std::sync::Arc;
use std::time::Duration;

use epocha_core::{EpochaConfig, EpochaError, FetchStrategy, SampleSource, SignalKey};

/// Orchestrator that retrieves samples from registered sources and runs the
/// epoch core over them.
pub struct Epocha {
    pub(crate) sources: Vec<Arc<dyn SampleSource>>,
    pub(crate) cfg: EpochaConfig,
}

/// Builder for constructing an `Epocha` orchestrator with custom configuration.
pub struct EpochaBuilder {
    sources: Vec<Arc<dyn SampleSource>>,
    cfg: EpochaConfig,
}

impl Default for EpochaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EpochaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Starts with no sources; register at least one via [`Self::with_source`].
    /// Defaults: priority-with-fallback fetches, 5s per-page timeout, no
    /// overall deadline, at most 1000 pages per signal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: EpochaConfig::default(),
        }
    }

    /// Register a sample source.
    ///
    /// Registration order is the priority order used by
    /// `FetchStrategy::PriorityWithFallback`.
    #[must_use]
    pub fn with_source(mut self, s: Arc<dyn SampleSource>) -> Self {
        self.sources.push(s);
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    #[must_use]
    pub fn config(mut self, cfg: EpochaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the fetch strategy for signals served by several sources.
    ///
    /// - `PriorityWithFallback`: deterministic order, one source at a time;
    ///   failures before the first success are kept as report warnings.
    /// - `Latency`: paginate every eligible source concurrently and keep the
    ///   first one to finish; faster but multiplies upstream load.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the timeout applied to each page request.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set an overall deadline for [`Epocha::analyze`].
    ///
    /// When exceeded the analysis fails with `RequestTimeout("analyze")`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Bound the number of pages followed for one signal.
    #[must_use]
    pub const fn max_pages(mut self, pages: usize) -> Self {
        self.cfg.max_pages = pages;
        self
    }

    /// Build the `Epocha` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidInput` if no source has been registered or `max_pages`
    /// is zero.
    pub fn build(self) -> Result<Epocha, EpochaError> {
        if self.sources.is_empty() {
            return Err(EpochaError::invalid_input(
                "no sources registered; add at least one via with_source(...)",
            ));
        }
        if self.cfg.max_pages == 0 {
            return Err(EpochaError::invalid_input("max_pages must be at least 1"));
        }
        Ok(Epocha {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

/// Attribute an opaque error to the source that raised it. Errors that
/// already carry their origin pass through unchanged.
pub fn tag_err(source_name: &str, e: EpochaError) -> EpochaError {
    match e {
        e @ (EpochaError::NotFound { .. }
        | EpochaError::SourceTimeout { .. }
        | EpochaError::Source { .. }
        | EpochaError::PageLimit { .. }
        | EpochaError::RequestTimeout { .. }
        | EpochaError::AllSourcesTimedOut { .. }
        | EpochaError::AllSourcesFailed(_)) => e,
        other => EpochaError::Source {
            source_name: source_name.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Bound `fut` by an optional deadline, mapping expiry to `RequestTimeout`.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    capability: &'static str,
    fut: Fut,
) -> Result<T, EpochaError>
where
    Fut: core::future::Future<Output = Result<T, EpochaError>>,
{
    match deadline {
        Some(d) => (tokio::time::timeout(d, fut).await)
            .unwrap_or_else(|_| Err(EpochaError::request_timeout(capability))),
        None => fut.await,
    }
}

impl Epocha {
    /// Start building a new `Epocha` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let epocha = epocha::Epocha::builder()
    ///     .with_source(Arc::new(AvailabilityApi::new(base_url)))
    ///     .source_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> EpochaBuilder {
        EpochaBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EpochaConfig {
        &self.cfg
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "epocha::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, EpochaError>
    where
        Fut: core::future::Future<Output = Result<T, EpochaError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(EpochaError::source_timeout(source_name, capability)))
    }

    /// Sources that serve `signal`, in registration order.
    pub(crate) fn eligible(&self, signal: &SignalKey) -> Vec<Arc<dyn SampleSource>> {
        self.sources
            .iter()
            .filter(|s| s.serves(signal))
            .cloned()
            .collect()
    }
}
