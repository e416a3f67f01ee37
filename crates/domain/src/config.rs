//! Device configuration — the editable settings fetched on demand.

use serde::{Deserialize, Serialize};

/// Device configuration as returned by `GET /api/config`.
///
/// Authoritative only immediately after a fetch; the browser keeps no durable
/// copy (the device owns persistent storage, written via `POST /api/save`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Lights-on boundary, seconds since local midnight (0–86399).
    pub lights_start_s: u32,
    /// Lights-off boundary, seconds since local midnight (0–86399).
    pub lights_end_s: u32,
    /// Seconds the pump runs per cycle (timer mode).
    pub pump_on_sec: u32,
    /// Seconds between cycle starts (timer mode).
    pub pump_period: u32,
    /// True when pump control is driven by the humidity threshold instead of
    /// the fixed timer. Single source of truth for which pump fields are
    /// semantically active.
    pub humidity_mode: bool,
    /// Heater setpoint, °C.
    pub heater_setpoint_c: f64,
    /// Humidity (%) at which humidity-mode pump control activates.
    pub humidity_threshold: f64,
}
