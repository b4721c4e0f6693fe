//! Display normalization for device state snapshots.
//!
//! [`snapshot_view`] is a total function: every absent field renders as the
//! placeholder dash, and no input can make it fail.

use time::UtcOffset;

use fieldview_types::DeviceSnapshot;

use crate::chart::render_timestamp;

/// Placeholder shown for fields with no observed value.
pub const PLACEHOLDER: &str = "-";

/// Prompt shown while no device is selected.
pub const SELECT_DEVICE_PROMPT: &str = "Выберите устройство на карте.";

/// Generic fetch-failure message used when a fault carries no text.
pub const FETCH_FAILURE_MESSAGE: &str = "Ошибка загрузки метрик";

/// Display-ready rendering of one device snapshot.
///
/// Every field is a final string; callers place them, they never re-format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotView {
    /// Heading, e.g. `Устройство d1`.
    pub title: String,
    /// Scope line, e.g. `prod / t1`.
    pub scope: String,
    /// Relative humidity, e.g. `21.7 %`.
    pub humidity: String,
    /// Temperature, e.g. `21.5 °C`.
    pub temperature: String,
    /// Online flag: `да`, `нет` or the placeholder when unknown.
    pub online: String,
    /// Battery voltage, e.g. `3.61 В`.
    pub battery: String,
    /// Signal strength, e.g. `-97 dBm`.
    pub rssi: String,
    /// Signal-to-noise ratio, e.g. `8.5 dB`.
    pub snr: String,
    /// When the last sensor sample arrived.
    pub last_sensor_update: String,
    /// When the device state last changed.
    pub last_state_update: String,
}

/// Normalize a snapshot into display strings.
///
/// Timestamps are rendered in the supplied UTC offset; a zero timestamp
/// means "never observed" and renders as the placeholder, same as absent.
#[must_use]
pub fn snapshot_view(snapshot: &DeviceSnapshot, offset: UtcOffset) -> SnapshotView {
    SnapshotView {
        title: format!("Устройство {}", snapshot.device_id),
        scope: format!("{} / {}", snapshot.environment, snapshot.tenant_id),
        humidity: format_fixed1(snapshot.humidity, "%"),
        temperature: format_fixed1(snapshot.temperature, "°C"),
        online: match snapshot.online {
            Some(true) => "да".to_string(),
            Some(false) => "нет".to_string(),
            None => PLACEHOLDER.to_string(),
        },
        battery: snapshot
            .battery_volts
            .map(|volts| format!("{:.2} В", volts))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        rssi: snapshot
            .rssi_dbm
            .map(|rssi| format!("{} dBm", rssi))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        snr: format_fixed1(snapshot.snr_db, "dB"),
        last_sensor_update: format_update(snapshot.last_sensor_update_millis, offset),
        last_state_update: format_update(snapshot.last_state_update_millis, offset),
    }
}

fn format_fixed1(value: Option<f64>, unit: &str) -> String {
    value
        .map(|value| format!("{:.1} {}", value, unit))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Millisecond timestamps are second-resolution on the wire; zero means
/// "never observed".
fn format_update(millis: Option<i64>, offset: UtcOffset) -> String {
    match millis {
        Some(millis) if millis != 0 => render_timestamp(millis / 1000, offset),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot() -> DeviceSnapshot {
        DeviceSnapshot::builder("d1", "prod", "t1")
            .humidity(21.66)
            .temperature(19.04)
            .online(true)
            .battery_volts(3.614)
            .rssi_dbm(-97)
            .snr_db(8.47)
            .last_sensor_update_millis(1_000_000)
            .last_state_update_millis(2_000_000)
            .build()
    }

    #[test]
    fn test_full_snapshot_rendering() {
        let view = snapshot_view(&full_snapshot(), UtcOffset::UTC);

        assert_eq!(view.title, "Устройство d1");
        assert_eq!(view.scope, "prod / t1");
        assert_eq!(view.humidity, "21.7 %");
        assert_eq!(view.temperature, "19.0 °C");
        assert_eq!(view.online, "да");
        assert_eq!(view.battery, "3.61 В");
        assert_eq!(view.rssi, "-97 dBm");
        assert_eq!(view.snr, "8.5 dB");
        // 1_000_000 ms -> 1000 s
        assert_eq!(view.last_sensor_update, "01.01.1970 00:16:40");
        assert_eq!(view.last_state_update, "01.01.1970 00:33:20");
    }

    #[test]
    fn test_empty_snapshot_renders_placeholders() {
        let snapshot = DeviceSnapshot::builder("d2", "stage", "t9").build();
        let view = snapshot_view(&snapshot, UtcOffset::UTC);

        assert_eq!(view.humidity, PLACEHOLDER);
        assert_eq!(view.temperature, PLACEHOLDER);
        assert_eq!(view.online, PLACEHOLDER);
        assert_eq!(view.battery, PLACEHOLDER);
        assert_eq!(view.rssi, PLACEHOLDER);
        assert_eq!(view.snr, PLACEHOLDER);
        assert_eq!(view.last_sensor_update, PLACEHOLDER);
        assert_eq!(view.last_state_update, PLACEHOLDER);
    }

    #[test]
    fn test_online_tri_state() {
        let mut snapshot = full_snapshot();

        snapshot.online = Some(false);
        assert_eq!(snapshot_view(&snapshot, UtcOffset::UTC).online, "нет");

        snapshot.online = None;
        assert_eq!(snapshot_view(&snapshot, UtcOffset::UTC).online, PLACEHOLDER);
    }

    #[test]
    fn test_zero_timestamp_is_placeholder() {
        let mut snapshot = full_snapshot();
        snapshot.last_sensor_update_millis = Some(0);

        let view = snapshot_view(&snapshot, UtcOffset::UTC);
        assert_eq!(view.last_sensor_update, PLACEHOLDER);
        // The other timestamp is unaffected
        assert_ne!(view.last_state_update, PLACEHOLDER);
    }

    #[test]
    fn test_zero_values_are_not_placeholders() {
        // Zero is a real observation, distinct from absent
        let snapshot = DeviceSnapshot::builder("d1", "prod", "t1")
            .humidity(0.0)
            .temperature(0.0)
            .battery_volts(0.0)
            .rssi_dbm(0)
            .build();

        let view = snapshot_view(&snapshot, UtcOffset::UTC);
        assert_eq!(view.humidity, "0.0 %");
        assert_eq!(view.temperature, "0.0 °C");
        assert_eq!(view.battery, "0.00 В");
        assert_eq!(view.rssi, "0 dBm");
    }

    #[test]
    fn test_timestamp_respects_offset() {
        let snapshot = DeviceSnapshot::builder("d1", "prod", "t1")
            .last_sensor_update_millis(1_000_000)
            .build();

        let view = snapshot_view(&snapshot, UtcOffset::from_hms(3, 0, 0).unwrap());
        assert_eq!(view.last_sensor_update, "01.01.1970 03:16:40");
    }
}
