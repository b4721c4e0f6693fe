//! Time window and bucket selection for the metrics chart.
//!
//! The selector owns what the operator typed, not what the backend needs:
//! boundaries are kept as editable local-time strings and re-validated on
//! every change. Invalid text is retained for further editing and simply
//! yields no [`TimeRange`] — validity is a precondition gate for fetching,
//! not an error state.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use fieldview_types::{Bucket, TimeRange};

/// Boundary layout, the `datetime-local` input shape.
const BOUNDARY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Holds and validates the `[from, to]` window and current bucket choice.
///
/// The current time is an injected dependency so tests can fix "now"; the
/// selector also remembers its UTC offset and interprets the boundary
/// strings in it when converting to epoch seconds.
#[derive(Debug, Clone)]
pub struct TimeRangeSelector {
    from: String,
    to: String,
    bucket: Bucket,
    offset: UtcOffset,
}

impl TimeRangeSelector {
    /// Build a selector with the default 24-hour window ending at `now`.
    #[must_use]
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            from: format_boundary(now - Duration::hours(24)),
            to: format_boundary(now),
            bucket: Bucket::Hour,
            offset: now.offset(),
        }
    }

    /// Lower boundary as typed, `YYYY-MM-DDTHH:MM`.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Upper boundary as typed, `YYYY-MM-DDTHH:MM`.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Currently selected aggregation granularity.
    #[must_use]
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    /// Replace the lower boundary text.
    pub fn set_from(&mut self, from: impl Into<String>) {
        self.from = from.into();
    }

    /// Replace the upper boundary text.
    pub fn set_to(&mut self, to: impl Into<String>) {
        self.to = to.into();
    }

    /// Select a different aggregation granularity.
    pub fn set_bucket(&mut self, bucket: Bucket) {
        self.bucket = bucket;
    }

    /// The validated window, or `None` while the fields do not form one.
    ///
    /// Re-derived on every call: both boundaries must parse and the lower
    /// must precede the upper.
    #[must_use]
    pub fn range(&self) -> Option<TimeRange> {
        let from = self.parse_boundary(&self.from)?;
        let to = self.parse_boundary(&self.to)?;
        TimeRange::new(from, to).ok()
    }

    /// Whether the current boundaries form a fetchable window.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.range().is_some()
    }

    fn parse_boundary(&self, text: &str) -> Option<i64> {
        let parsed = PrimitiveDateTime::parse(text, &BOUNDARY_FORMAT).ok()?;
        Some(parsed.assume_offset(self.offset).unix_timestamp())
    }
}

fn format_boundary(at: OffsetDateTime) -> String {
    at.format(&BOUNDARY_FORMAT).unwrap_or_else(|_| String::new())
}
