//! Asynchronous fetch lifecycle for the metrics chart.
//!
//! [`MetricsFetchController`] reacts to parameter changes by spawning one
//! fetch task per request generation and committing only the generation
//! that is still current when its result arrives. Superseded completions
//! are dropped silently; there are no retries and no request queuing.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use fieldview_types::{Bucket, MetricPoint, TimeRange};

use crate::display::FETCH_FAILURE_MESSAGE;
use crate::error::Result;
use crate::source::{MetricsQuery, MetricsSource};

/// Completed fetches queue here until the owning view applies them.
const OUTCOME_CHANNEL_CAPACITY: usize = 8;

/// Retrieval state of the metrics chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    /// Nothing to fetch: no device selected or no valid time range.
    #[default]
    Idle,
    /// A fetch for the current request identity is in flight.
    Loading,
    /// The current identity's fetch completed with data.
    Success(Vec<MetricPoint>),
    /// The current identity's fetch failed; holds the display message.
    Failure(String),
}

/// What the chart area should render, derived from [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartView<'a> {
    /// No device selected; render a prompt, not an error.
    NoDevice,
    /// Fetch in flight.
    Loading,
    /// Nothing fetched yet, or the fetch returned an empty series.
    NoData,
    /// Committed data to plot.
    Ready(&'a [MetricPoint]),
    /// Committed failure message.
    Error(&'a str),
}

/// Result of one fetch task, tagged with the identity it was started under.
#[derive(Debug)]
pub struct FetchOutcome {
    query: MetricsQuery,
    result: Result<Vec<MetricPoint>>,
}

/// Orchestrates metrics retrieval for a single device view.
///
/// The controller owns the request parameters and the visible state. Every
/// setter re-derives the desired [`MetricsQuery`]; when it changes, the
/// previous in-flight fetch is superseded and a new task starts. Results
/// come back over an internal channel and commit through [`apply`] only if
/// their identity still equals the current one — arrival order does not
/// matter.
///
/// Owned by a single logical view instance; dropping the controller cancels
/// whatever is still in flight.
///
/// [`apply`]: MetricsFetchController::apply
pub struct MetricsFetchController {
    source: Arc<dyn MetricsSource>,
    environment: String,
    tenant_id: String,
    device_id: Option<String>,
    bucket: Bucket,
    range: Option<TimeRange>,
    state: FetchState,
    current: Option<MetricsQuery>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
    cancel: CancellationToken,
}

impl MetricsFetchController {
    /// Create a controller scoped to one environment and tenant.
    ///
    /// Starts idle: no device selected, no time range, hourly bucket.
    pub fn new(
        source: Arc<dyn MetricsSource>,
        environment: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
        Self {
            source,
            environment: environment.into(),
            tenant_id: tenant_id.into(),
            device_id: None,
            bucket: Bucket::default(),
            range: None,
            state: FetchState::Idle,
            current: None,
            outcome_tx,
            outcome_rx,
            cancel: CancellationToken::new(),
        }
    }

    /// Select a device, or clear the selection with `None`.
    pub fn set_device(&mut self, device_id: Option<String>) {
        self.device_id = device_id;
        self.sync();
    }

    /// Change the aggregation granularity.
    pub fn set_bucket(&mut self, bucket: Bucket) {
        self.bucket = bucket;
        self.sync();
    }

    /// Supply the validated time window, or `None` while the selector is
    /// invalid. An invalid selector suppresses fetching; it is not an error.
    pub fn set_range(&mut self, range: Option<TimeRange>) {
        self.range = range;
        self.sync();
    }

    /// Point the controller at a different environment and tenant.
    pub fn set_scope(&mut self, environment: impl Into<String>, tenant_id: impl Into<String>) {
        self.environment = environment.into();
        self.tenant_id = tenant_id.into();
        self.sync();
    }

    /// Current retrieval state.
    #[must_use]
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Whether a fetch for the current identity is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Committed data, if the current identity succeeded.
    #[must_use]
    pub fn data(&self) -> Option<&[MetricPoint]> {
        match &self.state {
            FetchState::Success(points) => Some(points),
            _ => None,
        }
    }

    /// Committed failure message, if the current identity failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Identity of the request generation currently allowed to commit.
    #[must_use]
    pub fn current_query(&self) -> Option<&MetricsQuery> {
        self.current.as_ref()
    }

    /// What the chart area should render right now.
    #[must_use]
    pub fn view(&self) -> ChartView<'_> {
        if self.device_id.is_none() {
            return ChartView::NoDevice;
        }
        match &self.state {
            FetchState::Idle => ChartView::NoData,
            FetchState::Loading => ChartView::Loading,
            FetchState::Success(points) if points.is_empty() => ChartView::NoData,
            FetchState::Success(points) => ChartView::Ready(points),
            FetchState::Failure(message) => ChartView::Error(message),
        }
    }

    /// Apply any completed fetches without waiting.
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply(outcome);
        }
    }

    /// Wait for the next completed fetch and apply it.
    ///
    /// Intended for callers that know a fetch is in flight; with nothing in
    /// flight this waits indefinitely.
    pub async fn recv(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply(outcome);
        }
    }

    /// Commit a fetch outcome if its identity is still current.
    ///
    /// Stale outcomes are dropped without touching visible state — this is
    /// logical cancellation, not an error.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        if self.current.as_ref() != Some(&outcome.query) {
            debug!(query = ?outcome.query, "discarding superseded fetch result");
            return;
        }
        self.state = match outcome.result {
            Ok(points) => {
                info!(device_id = %outcome.query.device_id, points = points.len(), "metrics committed");
                FetchState::Success(points)
            }
            Err(error) => {
                let message = error.to_string();
                let message = if message.is_empty() {
                    FETCH_FAILURE_MESSAGE.to_string()
                } else {
                    message
                };
                info!(device_id = %outcome.query.device_id, error = %message, "metrics fetch failed");
                FetchState::Failure(message)
            }
        };
    }

    /// The query the current parameters call for, if they are complete.
    fn desired_query(&self) -> Option<MetricsQuery> {
        let device_id = self.device_id.clone()?;
        let range = self.range?;
        Some(MetricsQuery {
            environment: self.environment.clone(),
            tenant_id: self.tenant_id.clone(),
            device_id,
            bucket: self.bucket,
            range,
        })
    }

    /// Re-derive the current identity and start a fetch if it changed.
    ///
    /// Marking `self.current` is what supersedes the previous generation:
    /// its task keeps running, but its outcome can no longer match.
    fn sync(&mut self) {
        let next = self.desired_query();
        if next == self.current {
            return;
        }
        match next {
            None => {
                self.current = None;
                self.state = FetchState::Idle;
            }
            Some(query) => {
                self.current = Some(query.clone());
                self.state = FetchState::Loading;
                self.spawn_fetch(query);
            }
        }
    }

    fn spawn_fetch(&self, query: MetricsQuery) {
        debug!(?query, "starting metrics fetch");
        let source = Arc::clone(&self.source);
        let outcome_tx = self.outcome_tx.clone();
        let cancel = self.cancel.child_token();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                result = source.fetch_device_metrics(&query) => result,
            };
            // A closed channel means the owning view is gone.
            let _ = outcome_tx.send(FetchOutcome { query, result }).await;
        });
    }
}

impl Drop for MetricsFetchController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
