use epocha_core::{
    AnalysisReport, Condition, EpochaError, SignalQuery, TimelineRenderer, Timestamp,
    collate_pages, detect_epochs, intersect_epochs,
};

use crate::Epocha;

type Detected = (Condition<Timestamp>, Vec<EpochaError>);

impl Epocha {
    async fn detect_with_warnings(&self, query: &SignalQuery) -> Result<Detected, EpochaError> {
        let (pages, warnings) = self.fetch_pages(&query.signal).await?;
        let seq = collate_pages(pages, &query.channel)?;
        let epochs = detect_epochs(seq.samples(), &query.target)?;
        Ok((Condition::new(query.label.clone(), epochs)?, warnings))
    }

    /// Fetch one signal and derive the epochs during which its channel held
    /// the query's target state.
    ///
    /// # Errors
    /// Propagates source errors from retrieval and `InvalidInput` from
    /// collation or detection.
    pub async fn detect(&self, query: &SignalQuery) -> Result<Condition<Timestamp>, EpochaError> {
        self.detect_with_warnings(query).await.map(|(c, _)| c)
    }

    /// Detect every query concurrently, then intersect the conditions.
    ///
    /// Behavior:
    /// - Queries are fetched and detected in parallel; the first failure
    ///   aborts the analysis.
    /// - The whole call is bounded by `request_timeout` when configured.
    /// - An empty `combined` list is a normal outcome: no instant satisfied
    ///   all conditions. Check it with [`AnalysisReport::is_empty`].
    /// - Errors from sources that failed before a fallback succeeded are
    ///   returned as `warnings`.
    ///
    /// # Errors
    /// - `InvalidInput` if `queries` is empty, or from collation/detection.
    /// - `RequestTimeout("analyze")` when the deadline expires.
    /// - Source errors as described on [`Epocha::fetch_samples`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "epocha::core::analyze",
            skip(self, queries),
            fields(queries = queries.len()),
        )
    )]
    pub async fn analyze(
        &self,
        queries: &[SignalQuery],
    ) -> Result<AnalysisReport<Timestamp>, EpochaError> {
        if queries.is_empty() {
            return Err(EpochaError::invalid_input(
                "analysis requires at least one signal query",
            ));
        }

        let fut = async {
            let detected =
                futures::future::try_join_all(queries.iter().map(|q| self.detect_with_warnings(q)))
                    .await?;
            let mut conditions = Vec::with_capacity(detected.len());
            let mut warnings = Vec::new();
            for (c, w) in detected {
                conditions.push(c);
                warnings.extend(w);
            }
            let combined = intersect_epochs(&conditions)?;
            Ok::<_, EpochaError>(AnalysisReport {
                conditions,
                combined,
                warnings,
            })
        };
        let report = crate::core::with_request_deadline(self.cfg.request_timeout, "analyze", fut)
            .await?;

        #[cfg(feature = "tracing")]
        {
            if report.is_empty() {
                tracing::info!(
                    conditions = report.conditions.len(),
                    "no epochs satisfy all conditions"
                );
            }
        }

        Ok(report)
    }

    /// Hand the report's timeline rows to `renderer`.
    ///
    /// # Errors
    /// Returns whatever the renderer reports, typically `EpochaError::Render`.
    pub fn render(
        &self,
        report: &AnalysisReport<Timestamp>,
        renderer: &dyn TimelineRenderer<Timestamp>,
    ) -> Result<(), EpochaError> {
        renderer.render(&report.timeline_rows())
    }
}
