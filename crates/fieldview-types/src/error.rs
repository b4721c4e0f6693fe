//! Error types for parameter validation in fieldview-types.

use thiserror::Error;

/// Errors that can occur when validating telemetry parameters.
///
/// This error type is platform-agnostic and does not include transport
/// errors (those belong in fieldview-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Bucket spelling not recognized.
    #[error("unknown bucket: {0:?}")]
    UnknownBucket(String),

    /// Time range is inverted or empty.
    #[error("invalid time range: from {from_seconds} must precede to {to_seconds}")]
    InvalidRange {
        /// Lower boundary, epoch seconds.
        from_seconds: i64,
        /// Upper boundary, epoch seconds.
        to_seconds: i64,
    },
}

/// Result type alias using fieldview-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
