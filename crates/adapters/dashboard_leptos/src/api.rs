//! HTTP implementation of the `DeviceApi` port, wrapping `gloo-net` for
//! calls to the device's `/api/*` endpoints.
//!
//! Every call is single-shot. A non-2xx response becomes
//! [`DeviceError::Http`] carrying the status line — the body is never read
//! for those. Requests that never complete become [`DeviceError::Network`].
//! POST ack bodies are ignored beyond the status check.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use hydroview_app::ports::DeviceApi;
use hydroview_domain::command::{FanCommand, HeaterCommand, LightsCommand, PumpCommand};
use hydroview_domain::config::DeviceConfig;
use hydroview_domain::error::DeviceError;
use hydroview_domain::status::DeviceStatus;

/// Device API client. Paths are relative: the device serves the dashboard
/// itself, so the API always lives on the same origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDeviceApi;

fn to_network(err: gloo_net::Error) -> DeviceError {
    DeviceError::Network(err.to_string())
}

fn check_status(resp: &Response) -> Result<(), DeviceError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(DeviceError::Http {
            status: resp.status(),
            status_text: resp.status_text(),
        })
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, DeviceError> {
    let resp = Request::get(path).send().await.map_err(to_network)?;
    check_status(&resp)?;
    resp.json::<T>().await.map_err(to_network)
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), DeviceError> {
    let resp = Request::post(path)
        .json(body)
        .map_err(to_network)?
        .send()
        .await
        .map_err(to_network)?;
    check_status(&resp)
}

impl DeviceApi for HttpDeviceApi {
    fn fetch_status(&self) -> impl Future<Output = Result<DeviceStatus, DeviceError>> {
        get_json("/api/status")
    }

    fn fetch_config(&self) -> impl Future<Output = Result<DeviceConfig, DeviceError>> {
        get_json("/api/config")
    }

    fn send_lights(
        &self,
        command: &LightsCommand,
    ) -> impl Future<Output = Result<(), DeviceError>> {
        post_json("/api/lights", command)
    }

    fn send_pump(&self, command: &PumpCommand) -> impl Future<Output = Result<(), DeviceError>> {
        post_json("/api/pump", command)
    }

    fn send_heater(
        &self,
        command: &HeaterCommand,
    ) -> impl Future<Output = Result<(), DeviceError>> {
        post_json("/api/heater", command)
    }

    fn send_fan(&self, command: &FanCommand) -> impl Future<Output = Result<(), DeviceError>> {
        post_json("/api/fan", command)
    }

    fn save_config(&self) -> impl Future<Output = Result<(), DeviceError>> {
        async { post_json("/api/save", &serde_json::json!({})).await }
    }
}
