//! Error types for fieldview-core.
//!
//! Retrieval faults (network, server, authorization) surface as a concise
//! message in the view; they never terminate the surrounding view and are
//! never retried automatically. Range validation is not an error at this
//! layer: an invalid range simply suppresses fetch initiation (see
//! [`crate::range::TimeRangeSelector`]).

use thiserror::Error;

use fieldview_types::ParseError;

/// Errors that can occur when retrieving device metrics.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The data source endpoint could not be reached.
    #[error("service not reachable at {url}: {message}")]
    NotReachable {
        /// The URL that was requested.
        url: String,
        /// Transport-level failure description.
        message: String,
    },

    /// The data source answered with a non-success status.
    ///
    /// Displays as the server-supplied message alone; the status code is
    /// carried for callers that branch on it.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the server, or a generic fallback.
        message: String,
    },

    /// The response body did not match the metrics contract.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid configuration provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Parameter validation failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Create an API error with status context.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type alias using fieldview-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        // The display string is what the controller commits as the failure
        // message, so the status must not leak into it.
        let err = Error::api(504, "timeout");
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn test_not_reachable_display() {
        let err = Error::NotReachable {
            url: "http://localhost:8080/api".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("http://localhost:8080/api"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = Error::invalid_config("URL must start with http://");
        assert_eq!(
            err.to_string(),
            "invalid configuration: URL must start with http://"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: Error = fieldview_types::TimeRange::new(5, 5).unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("invalid time range"));
    }
}
