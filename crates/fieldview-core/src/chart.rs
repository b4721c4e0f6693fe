//! Transformation of raw metric points into chart-ready series.
//!
//! [`chart_series`] is pure and allocation-per-call only: no shared state,
//! no side effects, idempotent. It is safe to call on every render.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use fieldview_types::MetricPoint;

/// Rendering used for chart labels and snapshot timestamps.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day].[month].[year] [hour]:[minute]:[second]");

/// One display-ready chart sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Bucket timestamp, epoch milliseconds (chart x-coordinate).
    pub ts_millis: i64,
    /// Rendered date/time for the axis tick and tooltip.
    pub label: String,
    /// Average temperature within the bucket, °C.
    pub t_avg: Option<f64>,
    /// Average relative humidity within the bucket, percent.
    pub h_avg: Option<f64>,
}

/// Map raw metric points into chart-ready samples.
///
/// Produces one output element per input element, preserving order. Empty
/// input yields empty output. Labels are rendered in the supplied UTC
/// offset so the caller controls the displayed timezone.
#[must_use]
pub fn chart_series(points: &[MetricPoint], offset: UtcOffset) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|point| ChartPoint {
            ts_millis: point.ts * 1000,
            label: render_timestamp(point.ts, offset),
            t_avg: point.t_avg,
            h_avg: point.h_avg,
        })
        .collect()
}

/// Render an epoch-seconds instant as a display string in the given offset.
///
/// An instant outside the representable datetime range renders empty rather
/// than failing; transformation must stay total.
pub(crate) fn render_timestamp(seconds: i64, offset: UtcOffset) -> String {
    match OffsetDateTime::from_unix_timestamp(seconds) {
        Ok(at) => at
            .to_offset(offset)
            .format(&TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| String::new()),
        Err(_) => String::new(),
    }
}
