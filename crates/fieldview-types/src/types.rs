//! Core types for Fieldview device telemetry.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Aggregation granularity for the metrics time series.
///
/// The bucket is chosen by the caller and computed by the backend data
/// source; clients only validate and forward it.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new granularities
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Bucket {
    /// One point per hour.
    #[default]
    Hour,
    /// One point per day.
    Day,
    /// One point per week.
    Week,
}

impl Bucket {
    /// Wire spelling used in API query parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldview_types::Bucket;
    ///
    /// assert_eq!(Bucket::Hour.as_str(), "hour");
    /// assert_eq!(Bucket::Week.as_str(), "week");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Hour => "hour",
            Bucket::Day => "day",
            Bucket::Week => "week",
        }
    }

    /// Human-readable label for a granularity selector.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Hour => "Часы",
            Bucket::Day => "Дни",
            Bucket::Week => "Недели",
        }
    }
}

impl FromStr for Bucket {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Bucket::Hour),
            "day" => Ok(Bucket::Day),
            "week" => Ok(Bucket::Week),
            _ => Err(ParseError::UnknownBucket(s.to_string())),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time window in epoch seconds, as forwarded to the data source.
///
/// Construction enforces `from_seconds < to_seconds`, so an inverted or
/// empty window is unrepresentable downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    from_seconds: i64,
    to_seconds: i64,
}

impl TimeRange {
    /// Build a validated time window.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidRange`] unless `from_seconds < to_seconds`.
    pub fn new(from_seconds: i64, to_seconds: i64) -> Result<Self, ParseError> {
        if from_seconds >= to_seconds {
            return Err(ParseError::InvalidRange {
                from_seconds,
                to_seconds,
            });
        }
        Ok(Self {
            from_seconds,
            to_seconds,
        })
    }

    /// Lower boundary, epoch seconds.
    #[must_use]
    pub fn from_seconds(&self) -> i64 {
        self.from_seconds
    }

    /// Upper boundary, epoch seconds.
    #[must_use]
    pub fn to_seconds(&self) -> i64 {
        self.to_seconds
    }

    /// Window length in seconds. Always positive.
    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        self.to_seconds - self.from_seconds
    }
}

/// One aggregated sample of the metrics time series.
///
/// Averages are absent when the bucket interval holds no readings for that
/// quantity; absent is distinct from zero. Responses are ordered
/// non-decreasing by `ts` and may be empty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricPoint {
    /// Bucket timestamp, epoch seconds.
    pub ts: i64,
    /// Average temperature within the bucket, °C.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "tAvg", default, skip_serializing_if = "Option::is_none")
    )]
    pub t_avg: Option<f64>,
    /// Average relative humidity within the bucket, percent.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "hAvg", default, skip_serializing_if = "Option::is_none")
    )]
    pub h_avg: Option<f64>,
}

/// Latest known state of one field device.
///
/// Supplied by an external collaborator (device selection, map view) and
/// treated as a read-only input. Absent fields mean "no value observed yet",
/// which is distinct from zero.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceSnapshot {
    /// Unique device identifier.
    #[cfg_attr(feature = "serde", serde(rename = "deviceId"))]
    pub device_id: String,
    /// Deployment environment the device reports into.
    #[cfg_attr(feature = "serde", serde(rename = "env"))]
    pub environment: String,
    /// Tenant owning the device.
    #[cfg_attr(feature = "serde", serde(rename = "tenantId"))]
    pub tenant_id: String,
    /// Relative humidity, percent.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "h", default, skip_serializing_if = "Option::is_none")
    )]
    pub humidity: Option<f64>,
    /// Temperature, °C.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "t", default, skip_serializing_if = "Option::is_none")
    )]
    pub temperature: Option<f64>,
    /// Whether the device is currently online. Absent means unknown.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub online: Option<bool>,
    /// Battery voltage, volts.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "bat", default, skip_serializing_if = "Option::is_none")
    )]
    pub battery_volts: Option<f64>,
    /// Received signal strength, dBm.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "rssi", default, skip_serializing_if = "Option::is_none")
    )]
    pub rssi_dbm: Option<i32>,
    /// Signal-to-noise ratio, dB.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "snr", default, skip_serializing_if = "Option::is_none")
    )]
    pub snr_db: Option<f64>,
    /// When the last sensor sample arrived, epoch milliseconds.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "tsHt", default, skip_serializing_if = "Option::is_none")
    )]
    pub last_sensor_update_millis: Option<i64>,
    /// When the device state last changed, epoch milliseconds.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "tsState", default, skip_serializing_if = "Option::is_none")
    )]
    pub last_state_update_millis: Option<i64>,
}

impl DeviceSnapshot {
    /// Create a builder for constructing `DeviceSnapshot` with optional fields.
    pub fn builder(
        device_id: impl Into<String>,
        environment: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> DeviceSnapshotBuilder {
        DeviceSnapshotBuilder {
            snapshot: DeviceSnapshot {
                device_id: device_id.into(),
                environment: environment.into(),
                tenant_id: tenant_id.into(),
                ..DeviceSnapshot::default()
            },
        }
    }
}

/// Builder for constructing `DeviceSnapshot` with optional sensor fields.
#[derive(Debug)]
#[must_use]
pub struct DeviceSnapshotBuilder {
    snapshot: DeviceSnapshot,
}

impl DeviceSnapshotBuilder {
    /// Set relative humidity.
    pub fn humidity(mut self, humidity: f64) -> Self {
        self.snapshot.humidity = Some(humidity);
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.snapshot.temperature = Some(temperature);
        self
    }

    /// Set the online flag.
    pub fn online(mut self, online: bool) -> Self {
        self.snapshot.online = Some(online);
        self
    }

    /// Set battery voltage.
    pub fn battery_volts(mut self, volts: f64) -> Self {
        self.snapshot.battery_volts = Some(volts);
        self
    }

    /// Set signal strength.
    pub fn rssi_dbm(mut self, rssi: i32) -> Self {
        self.snapshot.rssi_dbm = Some(rssi);
        self
    }

    /// Set signal-to-noise ratio.
    pub fn snr_db(mut self, snr: f64) -> Self {
        self.snapshot.snr_db = Some(snr);
        self
    }

    /// Set the last sensor sample timestamp.
    pub fn last_sensor_update_millis(mut self, millis: i64) -> Self {
        self.snapshot.last_sensor_update_millis = Some(millis);
        self
    }

    /// Set the last state change timestamp.
    pub fn last_state_update_millis(mut self, millis: i64) -> Self {
        self.snapshot.last_state_update_millis = Some(millis);
        self
    }

    /// Build the `DeviceSnapshot`.
    #[must_use]
    pub fn build(self) -> DeviceSnapshot {
        self.snapshot
    }
}
