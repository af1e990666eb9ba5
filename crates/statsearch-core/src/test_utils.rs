//! Test utilities for statsearch-core.
//!
//! Shared fixtures and an in-memory [`SearchSource`] that replays a script of
//! outcomes instead of touching the network. Compiled for this crate's tests
//! and for other crates through the `test-utils` feature.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::source::SearchSource;
use crate::types::{ImageVariant, ResultItem};

/// Builds `count` distinct result items with predictable field values.
pub fn sample_items(count: usize) -> Vec<ResultItem> {
    (1..=count).map(sample_item).collect()
}

/// Builds one result item whose fields are derived from `n`.
pub fn sample_item(n: usize) -> ResultItem {
    ResultItem {
        identifier: format!("{}", 1000 + n),
        title: format!("Statista result {}", n),
        link: format!("https://www.statista.com/statistics/{}/", 1000 + n),
        date: format!("2021-01-{:02}", n.min(28)),
        subject: format!("Subject {}", n),
        description: format!("Description of result {}.", n),
        images: vec![
            ImageVariant {
                src: format!("https://cdn.statcdn.com/{}-355.png", 1000 + n),
                width: 355,
            },
            ImageVariant {
                src: format!("https://cdn.statcdn.com/{}-170.png", 1000 + n),
                width: 170,
            },
        ],
    }
}

struct ScriptedOutcome {
    delay: Option<Duration>,
    result: Result<Vec<ResultItem>, FetchError>,
}

/// A [`SearchSource`] that returns pre-programmed outcomes in order.
///
/// Each call consumes the next outcome; an exhausted script fails with
/// [`FetchError::RequestFailed`]. Delays use the tokio clock so tests can run
/// with a paused runtime.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<ScriptedOutcome>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_items(self, items: Vec<ResultItem>) -> Self {
        self.push(None, Ok(items))
    }

    pub fn then_error(self, error: FetchError) -> Self {
        self.push(None, Err(error))
    }

    /// Queues a successful outcome that resolves after `delay`.
    pub fn then_delayed_items(self, delay: Duration, items: Vec<ResultItem>) -> Self {
        self.push(Some(delay), Ok(items))
    }

    /// Number of fetches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(self, delay: Option<Duration>, result: Result<Vec<ResultItem>, FetchError>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(ScriptedOutcome { delay, result });
        }
        self
    }
}

#[async_trait(?Send)]
impl SearchSource for ScriptedSource {
    async fn fetch_results(&self) -> Result<Vec<ResultItem>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());

        let Some(outcome) = next else {
            return Err(FetchError::RequestFailed("script exhausted".to_string()));
        };

        if let Some(delay) = outcome.delay {
            tokio::time::sleep(delay).await;
        }
        outcome.result
    }
}
