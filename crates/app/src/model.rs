//! Dashboard model — explicit application state with reducer-style updates.
//!
//! All UI state lives here instead of being scattered across the rendering
//! surface: the latest status snapshot, the raw strings backing every editable
//! form field, and the humidity-controls visibility flag. Each event applies
//! through exactly one method (`apply_status` for a poll tick, `apply_config`
//! for a config fetch, `set_pump_mode` for the selector listener), which keeps
//! the model unit-testable without a DOM.

use hydroview_domain::command::{FanState, PumpMode};
use hydroview_domain::config::DeviceConfig;
use hydroview_domain::status::{DeviceStatus, Reading};
use hydroview_domain::time::seconds_to_time_string;

/// Lights schedule form, both fields "HH:MM".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightsForm {
    pub start: String,
    pub end: String,
}

/// Pump settings form. Numeric fields stay raw strings until submission;
/// conversion happens at the command boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PumpForm {
    pub mode: PumpMode,
    pub on_sec: String,
    pub period: String,
    pub humidity_threshold: String,
}

/// Heater setpoint form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaterForm {
    pub setpoint: String,
}

/// Fan state form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanForm {
    pub state: FanState,
}

/// The whole dashboard state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardModel {
    /// Latest status snapshot; `None` until the first successful fetch, which
    /// renders every read-only field as a placeholder.
    pub status: Option<DeviceStatus>,
    pub lights: LightsForm,
    pub pump: PumpForm,
    pub heater: HeaterForm,
    pub fan: FanForm,
    /// Whether the humidity-specific pump controls are shown. Always equals
    /// the last-known humidity mode; written by [`Self::apply_config`] and
    /// [`Self::set_pump_mode`], last writer wins.
    pub humidity_controls_visible: bool,
}

impl DashboardModel {
    /// Apply a poll tick: replace the status snapshot wholesale.
    ///
    /// Editable form fields are never touched here, so in-progress operator
    /// edits survive every poll.
    pub fn apply_status(&mut self, status: DeviceStatus) {
        self.status = Some(status);
    }

    /// Apply a fetched configuration to every editable field.
    pub fn apply_config(&mut self, config: &DeviceConfig) {
        self.lights.start = seconds_to_time_string(config.lights_start_s);
        self.lights.end = seconds_to_time_string(config.lights_end_s);
        self.pump.on_sec = config.pump_on_sec.to_string();
        self.pump.period = config.pump_period.to_string();
        self.pump.mode = PumpMode::from_humidity_flag(config.humidity_mode);
        self.pump.humidity_threshold = config.humidity_threshold.to_string();
        self.heater.setpoint = config.heater_setpoint_c.to_string();
        self.humidity_controls_visible = config.humidity_mode;
    }

    /// Apply a pump-mode selector change.
    pub fn set_pump_mode(&mut self, mode: PumpMode) {
        self.pump.mode = mode;
        self.humidity_controls_visible = mode == PumpMode::Humidity;
    }

    #[must_use]
    pub fn temperature_text(&self) -> String {
        self.reading_text(|s| s.temperature, "°C")
    }

    #[must_use]
    pub fn humidity_text(&self) -> String {
        self.reading_text(|s| s.humidity, "%")
    }

    #[must_use]
    pub fn air_temperature_text(&self) -> String {
        self.reading_text(|s| s.air_temperature, "°C")
    }

    #[must_use]
    pub fn air_humidity_text(&self) -> String {
        self.reading_text(|s| s.air_humidity, "%")
    }

    #[must_use]
    pub fn ph_text(&self) -> String {
        self.reading_text(|s| s.ph, "")
    }

    #[must_use]
    pub fn tds_text(&self) -> String {
        self.reading_text(|s| s.tds, " ppm")
    }

    #[must_use]
    pub fn lights_indicator(&self) -> &'static str {
        self.indicator(|s| s.lights_on)
    }

    #[must_use]
    pub fn pump_indicator(&self) -> &'static str {
        self.indicator(|s| s.pump_on)
    }

    #[must_use]
    pub fn heater_indicator(&self) -> &'static str {
        self.indicator(|s| s.heater_on)
    }

    #[must_use]
    pub fn fan_indicator(&self) -> &'static str {
        self.indicator(|s| s.fan_on)
    }

    #[must_use]
    pub fn wifi_text(&self) -> &'static str {
        match &self.status {
            None => "--",
            Some(s) if s.wifi_connected => "Connected",
            Some(_) => "Disconnected",
        }
    }

    #[must_use]
    pub fn time_sync_text(&self) -> &'static str {
        match &self.status {
            None => "--",
            Some(s) if s.time_synced => "Synced",
            Some(_) => "Syncing...",
        }
    }

    fn reading_text(&self, pick: fn(&DeviceStatus) -> Reading, unit: &str) -> String {
        self.status
            .as_ref()
            .map_or(Reading::NONE, pick)
            .display(unit)
    }

    fn indicator(&self, pick: fn(&DeviceStatus) -> bool) -> &'static str {
        match &self.status {
            None => "--",
            Some(s) if pick(s) => "ON",
            Some(_) => "OFF",
        }
    }
}
