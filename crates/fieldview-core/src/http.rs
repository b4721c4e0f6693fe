//! HTTP data source for the backend metrics API.
//!
//! This is the production [`MetricsSource`]: one GET per query against the
//! backend that computes the bucketed aggregates.
//!
//! # Example
//!
//! ```no_run
//! use fieldview_core::http::HttpMetricsSource;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = HttpMetricsSource::new("http://localhost:8080")?;
//! assert_eq!(source.base_url(), "http://localhost:8080");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use fieldview_types::MetricPoint;

use crate::display::FETCH_FAILURE_MESSAGE;
use crate::error::{Error, Result};
use crate::source::{MetricsQuery, MetricsSource};

/// Per-request timeout for the metrics endpoint.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the device metrics API.
#[derive(Debug, Clone)]
pub struct HttpMetricsSource {
    client: Client,
    base_url: String,
}

/// Wire envelope of the metrics endpoint.
#[derive(Debug, Deserialize)]
struct MetricsResponse {
    points: Vec<MetricPoint>,
}

impl HttpMetricsSource {
    /// Create a new metrics source.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:8080")
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a malformed base URL or an
    /// unbuildable client.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::invalid_config(e.to_string()))?;
        Self::with_client(base_url, client)
    }

    /// Create a source with a custom reqwest Client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        // Normalize URL (remove trailing slash)
        let base_url = base_url.trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::invalid_config(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    async fn fetch_device_metrics(&self, query: &MetricsQuery) -> Result<Vec<MetricPoint>> {
        let url = format!(
            "{}/api/envs/{}/tenants/{}/devices/{}/metrics",
            self.base_url, query.environment, query.tenant_id, query.device_id
        );
        debug!(%url, bucket = %query.bucket, "requesting device metrics");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("bucket", query.bucket.as_str().to_string()),
                ("from", query.range.from_seconds().to_string()),
                ("to", query.range.to_seconds().to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::NotReachable {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| FETCH_FAILURE_MESSAGE.to_string());

            return Err(Error::api(status.as_u16(), message));
        }

        let body: MetricsResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;
        Ok(body.points)
    }
}
