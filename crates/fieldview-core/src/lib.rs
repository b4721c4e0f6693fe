//! Async telemetry retrieval core for Fieldview field devices.
//!
//! This crate implements the data side of a single-device telemetry view:
//! selecting a valid time window and aggregation granularity, driving the
//! asynchronous fetch lifecycle against a backend that computes bucketed
//! aggregates, and shaping raw results for display.
//!
//! # Features
//!
//! - **Time window selection**: editable local-time boundaries, re-validated
//!   on every change ([`TimeRangeSelector`])
//! - **Fetch lifecycle**: one request generation per parameter change,
//!   superseded results discarded at commit time
//!   ([`MetricsFetchController`])
//! - **Chart shaping**: pure transformation of raw points into labeled
//!   series ([`chart_series`])
//! - **Snapshot display**: total normalization of a device's latest state
//!   into display strings ([`snapshot_view`])
//!
//! Chart drawing, form widgets and the aggregation math itself are external
//! collaborators; the backend is reached through the single
//! [`MetricsSource`] contract (`http` feature for the reqwest-backed
//! implementation, [`MockSource`] for tests).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use time::OffsetDateTime;
//! use fieldview_core::http::HttpMetricsSource;
//! use fieldview_core::{MetricsFetchController, TimeRangeSelector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Arc::new(HttpMetricsSource::new("http://localhost:8080")?);
//! let selector = TimeRangeSelector::new(OffsetDateTime::now_utc());
//!
//! let mut controller = MetricsFetchController::new(source, "prod", "t1");
//! controller.set_range(selector.range());
//! controller.set_device(Some("d1".to_string()));
//!
//! controller.recv().await;
//! if let Some(points) = controller.data() {
//!     println!("{} points", points.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod controller;
pub mod display;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod mock;
pub mod range;
pub mod source;

// Core exports
pub use chart::{ChartPoint, chart_series};
pub use controller::{ChartView, FetchOutcome, FetchState, MetricsFetchController};
pub use display::{
    FETCH_FAILURE_MESSAGE, PLACEHOLDER, SELECT_DEVICE_PROMPT, SnapshotView, snapshot_view,
};
pub use error::{Error, Result};
#[cfg(feature = "http")]
pub use http::HttpMetricsSource;
pub use mock::MockSource;
pub use range::TimeRangeSelector;
pub use source::{MetricsQuery, MetricsSource};

// Re-export the data model from fieldview-types
pub use fieldview_types::{Bucket, DeviceSnapshot, MetricPoint, ParseError, TimeRange};
