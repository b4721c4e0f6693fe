//! Data-source seam for device metrics.
//!
//! The retrieval core reaches the backend through exactly one contract,
//! [`MetricsSource`]. Bucketed aggregation happens entirely on the other
//! side of this trait; the core validates parameters and forwards them.

use async_trait::async_trait;

use fieldview_types::{Bucket, MetricPoint, TimeRange};

use crate::error::Result;

/// Identity of one logical metrics request.
///
/// Any change to this tuple starts a new request generation; completions
/// from older generations are discarded at commit time (see
/// [`crate::controller::MetricsFetchController`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricsQuery {
    /// Deployment environment the device reports into.
    pub environment: String,
    /// Tenant owning the device.
    pub tenant_id: String,
    /// Device to query.
    pub device_id: String,
    /// Aggregation granularity, computed by the data source.
    pub bucket: Bucket,
    /// Validated time window.
    pub range: TimeRange,
}

/// Trait abstracting the backend that computes bucketed device metrics.
///
/// This trait enables writing code that works with both the HTTP backend
/// and mock sources for testing. Implementations return points ordered
/// non-decreasing by timestamp; an empty sequence is a valid response, not
/// an error.
///
/// # Example
///
/// ```ignore
/// use fieldview_core::{MetricsQuery, MetricsSource, Result};
///
/// async fn point_count<S: MetricsSource>(source: &S, query: &MetricsQuery) -> Result<usize> {
///     let points = source.fetch_device_metrics(query).await?;
///     Ok(points.len())
/// }
/// ```
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Fetch the aggregated series for one device over one time window.
    async fn fetch_device_metrics(&self, query: &MetricsQuery) -> Result<Vec<MetricPoint>>;
}
