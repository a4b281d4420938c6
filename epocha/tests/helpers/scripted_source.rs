#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use epocha::{
    EpochaError, PageCursor, Record, SamplePage, SampleSource, SignalKey, SourcePage, StateCode,
};
use tokio::time::{Duration, sleep};

use super::t;

/// In-memory source used by integration tests. Serves pre-built pages per
/// signal; behavior can be tailored via the fields below.
pub struct ScriptedSource {
    pub name: &'static str,
    pub pages: HashMap<String, Vec<SourcePage>>,
    pub delay_ms: u64,
    pub fail_with: Option<EpochaError>,
    pub only: Option<Vec<&'static str>>,
    pub loop_forever: bool,
    pub calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            pages: HashMap::new(),
            delay_ms: 0,
            fail_with: None,
            only: None,
            loop_forever: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Add a signal whose `data` channel takes the given `(sec, value)`
    /// samples, split into pages of `per_page` records.
    pub fn with_signal(mut self, signal: &str, samples: &[(i64, StateCode)], per_page: usize) -> Self {
        let chunks: Vec<Vec<Record<_, StateCode>>> = samples
            .chunks(per_page.max(1))
            .map(|c| {
                c.iter()
                    .map(|&(s, v)| Record::new(t(s), [("data", v)]))
                    .collect()
            })
            .collect();
        let n = chunks.len();
        let pages = chunks
            .into_iter()
            .enumerate()
            .map(|(i, records)| SamplePage {
                records,
                next: (i + 1 < n).then(|| PageCursor((i + 1).to_string())),
            })
            .collect();
        self.pages.insert(signal.to_string(), pages);
        self
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn failing(mut self, e: EpochaError) -> Self {
        self.fail_with = Some(e);
        self
    }

    pub fn serving_only(mut self, signals: &[&'static str]) -> Self {
        self.only = Some(signals.to_vec());
        self
    }

    pub fn endless(mut self) -> Self {
        self.loop_forever = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SampleSource for ScriptedSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn serves(&self, signal: &SignalKey) -> bool {
        self.only
            .as_ref()
            .is_none_or(|o| o.iter().any(|s| *s == signal.as_str()))
    }

    async fn fetch_page(
        &self,
        signal: &SignalKey,
        cursor: Option<&PageCursor>,
    ) -> Result<SourcePage, EpochaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        if self.loop_forever {
            return Ok(SamplePage {
                records: vec![],
                next: Some(PageCursor("again".into())),
            });
        }
        let pages = self
            .pages
            .get(signal.as_str())
            .ok_or_else(|| EpochaError::not_found(format!("samples for {signal}")))?;
        let idx = cursor.map_or(0, |c| c.0.parse::<usize>().unwrap_or(usize::MAX));
        pages
            .get(idx)
            .cloned()
            .ok_or_else(|| EpochaError::source(self.name, "cursor past end"))
    }
}
