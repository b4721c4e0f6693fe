//! Mock data source for testing.
//!
//! [`MockSource`] stands in for the backend metrics service so the fetch
//! lifecycle can be exercised without a network.
//!
//! # Features
//!
//! - **Failure injection**: flip the source into a failing state with a
//!   chosen message
//! - **Latency simulation**: add artificial delay to expose races between
//!   request generations
//! - **Scripted responses**: enqueue per-call latency/result pairs for
//!   scenarios where consecutive fetches must behave differently

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use fieldview_types::MetricPoint;

use crate::error::{Error, Result};
use crate::source::{MetricsQuery, MetricsSource};

/// A mock metrics source for testing.
///
/// Calls consume scripted responses first (FIFO); once the script queue is
/// empty, behavior falls back to the configured default points, failure
/// flag and latency.
#[derive(Debug, Default)]
pub struct MockSource {
    scripts: Mutex<VecDeque<Script>>,
    points: Mutex<Vec<MetricPoint>>,
    should_fail: AtomicBool,
    fail_message: Mutex<String>,
    latency_ms: AtomicU64,
    fetch_count: AtomicU32,
    last_query: Mutex<Option<MetricsQuery>>,
}

#[derive(Debug)]
struct Script {
    latency: Duration,
    result: Result<Vec<MetricPoint>>,
}

impl MockSource {
    /// Create a mock source that succeeds immediately with no points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source that succeeds with the given points.
    #[must_use]
    pub fn with_points(points: Vec<MetricPoint>) -> Self {
        let source = Self::default();
        source.set_points(points);
        source
    }

    /// Replace the default success payload.
    pub fn set_points(&self, points: Vec<MetricPoint>) {
        *self.points.lock().unwrap() = points;
    }

    /// Add artificial delay to every non-scripted fetch.
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    /// Make every non-scripted fetch fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.fail_message.lock().unwrap() = message.to_string();
        self.should_fail.store(true, Ordering::Relaxed);
    }

    /// Return to the succeeding state.
    pub fn succeed(&self) {
        self.should_fail.store(false, Ordering::Relaxed);
    }

    /// Enqueue one scripted response, consumed before any default behavior.
    pub fn enqueue(&self, latency: Duration, result: Result<Vec<MetricPoint>>) {
        self.scripts
            .lock()
            .unwrap()
            .push_back(Script { latency, result });
    }

    /// Number of fetches performed so far.
    #[must_use]
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    /// The query of the most recent fetch, if any.
    #[must_use]
    pub fn last_query(&self) -> Option<MetricsQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetricsSource for MockSource {
    async fn fetch_device_metrics(&self, query: &MetricsQuery) -> Result<Vec<MetricPoint>> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        *self.last_query.lock().unwrap() = Some(query.clone());

        let script = self.scripts.lock().unwrap().pop_front();
        if let Some(script) = script {
            if !script.latency.is_zero() {
                tokio::time::sleep(script.latency).await;
            }
            return script.result;
        }

        let latency = Duration::from_millis(self.latency_ms.load(Ordering::Relaxed));
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        if self.should_fail.load(Ordering::Relaxed) {
            let message = self.fail_message.lock().unwrap().clone();
            return Err(Error::api(500, message));
        }
        Ok(self.points.lock().unwrap().clone())
    }
}
