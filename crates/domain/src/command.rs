//! Outbound commands — the POST payloads relayed to the device.
//!
//! Each command is parsed from raw operator form strings at the boundary, so
//! malformed input fails with a [`ValidationError`] before any request is
//! issued. The device contract is the canonical wire representation: schedule
//! times travel as "HH:MM" strings on writes (the device parses them back to
//! seconds), everything else as plain JSON numbers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::{seconds_to_time_string, time_string_to_seconds};

/// Pump control policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PumpMode {
    /// Fixed on/off timer cycle.
    #[default]
    Timer,
    /// Run the pump when humidity drops below the threshold.
    Humidity,
}

impl PumpMode {
    /// Mode corresponding to the device's `humidity_mode` flag.
    #[must_use]
    pub fn from_humidity_flag(humidity_mode: bool) -> Self {
        if humidity_mode { Self::Humidity } else { Self::Timer }
    }
}

impl std::fmt::Display for PumpMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timer => f.write_str("timer"),
            Self::Humidity => f.write_str("humidity"),
        }
    }
}

impl FromStr for PumpMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timer" => Ok(Self::Timer),
            "humidity" => Ok(Self::Humidity),
            other => Err(ValidationError::InvalidChoice {
                field: "pump mode",
                input: other.to_string(),
            }),
        }
    }
}

/// Fan state selector.
///
/// The device fan auto-controls outside a manual band, so the dashboard
/// offers automatic control plus the two forced states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanState {
    #[default]
    Auto,
    On,
    Off,
}

impl std::fmt::Display for FanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

impl FromStr for FanState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(ValidationError::InvalidChoice {
                field: "fan state",
                input: other.to_string(),
            }),
        }
    }
}

/// `POST /api/lights` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightsCommand {
    pub start_time: String,
    pub end_time: String,
}

impl LightsCommand {
    /// Build from two operator-entered "HH:MM" strings.
    ///
    /// Input is normalized through the seconds codec, so the transmitted
    /// strings are always zero-padded and minute-exact.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] when either string is
    /// malformed.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        let start_s = time_string_to_seconds(start)?;
        let end_s = time_string_to_seconds(end)?;
        Ok(Self {
            start_time: seconds_to_time_string(start_s),
            end_time: seconds_to_time_string(end_s),
        })
    }
}

/// `POST /api/pump` payload.
///
/// All four fields are transmitted regardless of mode; the device ignores the
/// subset that does not apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpCommand {
    pub mode: PumpMode,
    pub on_sec: u32,
    pub period: u32,
    pub humidity_threshold: f64,
}

impl PumpCommand {
    /// Build from raw pump form fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNumber`] naming the offending field.
    pub fn parse(
        mode: PumpMode,
        on_sec: &str,
        period: &str,
        humidity_threshold: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            mode,
            on_sec: parse_number(on_sec, "pump on-seconds")?,
            period: parse_number(period, "pump period")?,
            humidity_threshold: parse_number(humidity_threshold, "humidity threshold")?,
        })
    }
}

/// `POST /api/heater` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaterCommand {
    pub setpoint: f64,
}

impl HeaterCommand {
    /// Build from the raw setpoint form field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNumber`] when the setpoint does not
    /// parse.
    pub fn parse(setpoint: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            setpoint: parse_number(setpoint, "heater setpoint")?,
        })
    }
}

/// `POST /api/fan` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FanCommand {
    pub state: FanState,
}

impl FanCommand {
    #[must_use]
    pub fn new(state: FanState) -> Self {
        Self { state }
    }
}

fn parse_number<T: FromStr>(input: &str, field: &'static str) -> Result<T, ValidationError> {
    input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}
