//! Device status — the read-only snapshot refreshed by every poll.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel the device substitutes for a sensor it could not read.
const NO_READING_SENTINEL: f64 = -999.0;

/// A sensor reading that may be absent.
///
/// The device reports `-999` for sensors it could not sample and may omit
/// fields entirely; both decode to an empty reading. Display always goes
/// through [`Reading::display`], so a sentinel can never leak to the operator
/// as a numeric string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reading(Option<f64>);

impl Reading {
    /// An empty reading ("no data").
    pub const NONE: Self = Self(None);

    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Some(value))
    }

    /// The raw value, if the sensor produced one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    /// Render for display with the given unit suffix, one decimal place.
    /// An empty reading renders as the `--` placeholder.
    #[must_use]
    pub fn display(&self, unit: &str) -> String {
        match self.0 {
            Some(value) => format!("{value:.1}{unit}"),
            None => format!("--{unit}"),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Reading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(Self(value.filter(|v| *v != NO_READING_SENTINEL)))
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Current device snapshot as returned by `GET /api/status`.
///
/// Each poll replaces the previous snapshot wholesale; stale and fresh fields
/// are never merged. Unknown fields (the device echoes its configuration into
/// the status payload) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Water temperature, °C.
    #[serde(default)]
    pub temperature: Reading,
    /// Relative humidity, %.
    #[serde(default)]
    pub humidity: Reading,
    /// Air temperature, °C.
    #[serde(default)]
    pub air_temperature: Reading,
    /// Air relative humidity, %.
    #[serde(default)]
    pub air_humidity: Reading,
    /// Water pH.
    #[serde(default)]
    pub ph: Reading,
    /// Total dissolved solids, ppm.
    #[serde(default)]
    pub tds: Reading,
    #[serde(default)]
    pub lights_on: bool,
    #[serde(default)]
    pub pump_on: bool,
    #[serde(default)]
    pub heater_on: bool,
    #[serde(default)]
    pub fan_on: bool,
    #[serde(default)]
    pub wifi_connected: bool,
    #[serde(default)]
    pub time_synced: bool,
}
