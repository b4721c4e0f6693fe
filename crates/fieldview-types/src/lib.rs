//! Platform-agnostic types for Fieldview device telemetry.
//!
//! This crate provides the shared data model used by the retrieval core
//! (fieldview-core) and any frontend embedding it.
//!
//! # Features
//!
//! - Aggregation bucket and validated time window for metrics queries
//! - Wire types for bucketed metric points and device state snapshots
//! - Error types for parameter validation
//!
//! # Example
//!
//! ```
//! use fieldview_types::{Bucket, TimeRange};
//!
//! let range = TimeRange::new(1000, 2000).unwrap();
//! assert_eq!(range.duration_seconds(), 1000);
//! assert_eq!(Bucket::default(), Bucket::Hour);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{Bucket, DeviceSnapshot, DeviceSnapshotBuilder, MetricPoint, TimeRange};

#[cfg(test)]
mod tests {
    use super::*;

    // --- Bucket tests ---

    #[test]
    fn test_bucket_wire_spelling() {
        assert_eq!(Bucket::Hour.as_str(), "hour");
        assert_eq!(Bucket::Day.as_str(), "day");
        assert_eq!(Bucket::Week.as_str(), "week");
    }

    #[test]
    fn test_bucket_from_str() {
        assert_eq!("hour".parse::<Bucket>().unwrap(), Bucket::Hour);
        assert_eq!("day".parse::<Bucket>().unwrap(), Bucket::Day);
        assert_eq!("week".parse::<Bucket>().unwrap(), Bucket::Week);
    }

    #[test]
    fn test_bucket_from_str_rejects_unknown() {
        let err = "month".parse::<Bucket>().unwrap_err();
        assert!(err.to_string().contains("month"));
        // Capitalized spellings are not on the wire
        assert!("Hour".parse::<Bucket>().is_err());
    }

    #[test]
    fn test_bucket_display_roundtrip() {
        for bucket in [Bucket::Hour, Bucket::Day, Bucket::Week] {
            assert_eq!(bucket.to_string().parse::<Bucket>().unwrap(), bucket);
        }
    }

    #[test]
    fn test_bucket_default_is_hour() {
        assert_eq!(Bucket::default(), Bucket::Hour);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(Bucket::Hour.label(), "Часы");
        assert_eq!(Bucket::Day.label(), "Дни");
        assert_eq!(Bucket::Week.label(), "Недели");
    }

    #[test]
    fn test_bucket_serialization() {
        assert_eq!(serde_json::to_string(&Bucket::Hour).unwrap(), "\"hour\"");
        assert_eq!(serde_json::to_string(&Bucket::Week).unwrap(), "\"week\"");
        let bucket: Bucket = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(bucket, Bucket::Day);
    }

    // --- TimeRange tests ---

    #[test]
    fn test_time_range_valid() {
        let range = TimeRange::new(1000, 2000).unwrap();
        assert_eq!(range.from_seconds(), 1000);
        assert_eq!(range.to_seconds(), 2000);
        assert_eq!(range.duration_seconds(), 1000);
    }

    #[test]
    fn test_time_range_rejects_inverted() {
        let err = TimeRange::new(2000, 1000).unwrap_err();
        assert!(matches!(err, ParseError::InvalidRange { .. }));
        assert!(err.to_string().contains("2000"));
    }

    #[test]
    fn test_time_range_rejects_empty() {
        assert!(TimeRange::new(1000, 1000).is_err());
    }

    #[test]
    fn test_time_range_negative_boundaries() {
        // Pre-epoch instants are still a valid window
        let range = TimeRange::new(-100, 50).unwrap();
        assert_eq!(range.duration_seconds(), 150);
    }

    // --- MetricPoint tests ---

    #[test]
    fn test_metric_point_wire_names() {
        let point = MetricPoint {
            ts: 1500,
            t_avg: Some(20.0),
            h_avg: Some(50.0),
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"ts\":1500"));
        assert!(json.contains("\"tAvg\":20.0"));
        assert!(json.contains("\"hAvg\":50.0"));
    }

    #[test]
    fn test_metric_point_absent_averages() {
        let point: MetricPoint = serde_json::from_str(r#"{"ts":1500}"#).unwrap();
        assert_eq!(point.ts, 1500);
        assert!(point.t_avg.is_none());
        assert!(point.h_avg.is_none());

        // Absent fields are omitted, not serialized as null
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"ts":1500}"#);
    }

    // --- DeviceSnapshot tests ---

    #[test]
    fn test_device_snapshot_wire_names() {
        let json = r#"{
            "deviceId": "d1",
            "env": "prod",
            "tenantId": "t1",
            "h": 41.5,
            "t": 21.0,
            "online": true,
            "bat": 3.61,
            "rssi": -97,
            "snr": 8.5,
            "tsHt": 1700000000000,
            "tsState": 1700000100000
        }"#;

        let snapshot: DeviceSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.device_id, "d1");
        assert_eq!(snapshot.environment, "prod");
        assert_eq!(snapshot.tenant_id, "t1");
        assert_eq!(snapshot.humidity, Some(41.5));
        assert_eq!(snapshot.temperature, Some(21.0));
        assert_eq!(snapshot.online, Some(true));
        assert_eq!(snapshot.battery_volts, Some(3.61));
        assert_eq!(snapshot.rssi_dbm, Some(-97));
        assert_eq!(snapshot.snr_db, Some(8.5));
        assert_eq!(snapshot.last_sensor_update_millis, Some(1_700_000_000_000));
        assert_eq!(snapshot.last_state_update_millis, Some(1_700_000_100_000));
    }

    #[test]
    fn test_device_snapshot_sparse() {
        // A device that has never reported carries identity fields only
        let json = r#"{"deviceId":"d2","env":"stage","tenantId":"t9"}"#;
        let snapshot: DeviceSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.humidity.is_none());
        assert!(snapshot.online.is_none());
        assert!(snapshot.last_sensor_update_millis.is_none());
    }

    #[test]
    fn test_device_snapshot_builder() {
        let snapshot = DeviceSnapshot::builder("d1", "prod", "t1")
            .humidity(41.5)
            .online(false)
            .rssi_dbm(-101)
            .build();

        assert_eq!(snapshot.device_id, "d1");
        assert_eq!(snapshot.humidity, Some(41.5));
        assert_eq!(snapshot.online, Some(false));
        assert_eq!(snapshot.rssi_dbm, Some(-101));
        assert!(snapshot.temperature.is_none());
        assert!(snapshot.battery_volts.is_none());
    }
}
