//! Device API port — the HTTP contract with the environmental-control device.
//!
//! The device is the server; this system is its sole client. Every call is
//! single-shot: no retries, no cancellation once issued. Callers decide
//! whether a failure reaches the operator (explicit actions do, the
//! steady-state poll does not).

use std::future::Future;

use hydroview_domain::command::{FanCommand, HeaterCommand, LightsCommand, PumpCommand};
use hydroview_domain::config::DeviceConfig;
use hydroview_domain::error::DeviceError;
use hydroview_domain::status::DeviceStatus;

/// Outbound port for talking to the device.
///
/// Futures are intentionally **not** `Send`: the sole consumer is the
/// single-threaded browser event loop, and the `gloo-net` futures backing the
/// production implementation are `!Send`.
///
/// Non-2xx responses surface as [`DeviceError::Http`] without the body being
/// read; requests that never complete surface as [`DeviceError::Network`].
/// Ack bodies of the POST endpoints are never inspected beyond the status
/// check.
pub trait DeviceApi {
    /// `GET /api/status` — current read-only snapshot.
    fn fetch_status(&self) -> impl Future<Output = Result<DeviceStatus, DeviceError>>;

    /// `GET /api/config` — current editable configuration.
    fn fetch_config(&self) -> impl Future<Output = Result<DeviceConfig, DeviceError>>;

    /// `POST /api/lights` — replace the lights schedule.
    fn send_lights(&self, command: &LightsCommand)
    -> impl Future<Output = Result<(), DeviceError>>;

    /// `POST /api/pump` — replace the pump settings.
    fn send_pump(&self, command: &PumpCommand) -> impl Future<Output = Result<(), DeviceError>>;

    /// `POST /api/heater` — replace the heater setpoint.
    fn send_heater(&self, command: &HeaterCommand)
    -> impl Future<Output = Result<(), DeviceError>>;

    /// `POST /api/fan` — set the fan state.
    fn send_fan(&self, command: &FanCommand) -> impl Future<Output = Result<(), DeviceError>>;

    /// `POST /api/save` — persist the device's applied settings to its own
    /// durable store. Takes no body.
    fn save_config(&self) -> impl Future<Output = Result<(), DeviceError>>;
}
