//! Status synchronization — the one-shot initialization fetch and the silent
//! steady-state poll.
//!
//! Initialization fetches status and config concurrently and succeeds only
//! when both resolve, so the dashboard either receives one combined update or
//! stays at its placeholders. Afterwards the steady-state poll fetches status
//! alone; its failures are logged and swallowed — a field device on a flaky
//! link must not spam the operator with notifications for a refresh they
//! never asked for. Explicit user actions report through
//! [`crate::services::UpdateService`] instead.
//!
//! Scheduling lives with the caller: ticks are issued every
//! [`POLL_INTERVAL_MS`] from a cancellable handle, overlapping ticks proceed
//! independently, and whichever response arrives last wins.

use hydroview_domain::config::DeviceConfig;
use hydroview_domain::error::DeviceError;
use hydroview_domain::status::DeviceStatus;

use crate::ports::DeviceApi;

/// Milliseconds between steady-state status polls.
pub const POLL_INTERVAL_MS: u32 = 2000;

/// Everything needed for the single combined UI update at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialSnapshot {
    pub status: DeviceStatus,
    pub config: DeviceConfig,
}

/// Use-cases for keeping the read-only dashboard fields fresh.
pub struct SyncService<A> {
    api: A,
}

impl<A: DeviceApi> SyncService<A> {
    /// Create a new service backed by the given device API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch status and config concurrently for the startup update.
    ///
    /// # Errors
    ///
    /// Returns the first [`DeviceError`] when either fetch fails; the caller
    /// raises a single error notification and leaves the placeholder UI in
    /// place.
    pub async fn initialize(&self) -> Result<InitialSnapshot, DeviceError> {
        let (status, config) = tokio::join!(self.api.fetch_status(), self.api.fetch_config());
        Ok(InitialSnapshot {
            status: status?,
            config: config?,
        })
    }

    /// One steady-state poll tick.
    ///
    /// Failures are logged and swallowed — never surfaced as a notification.
    /// Returns `None` so the caller simply skips the model update for this
    /// tick.
    pub async fn poll_status(&self) -> Option<DeviceStatus> {
        match self.api.fetch_status().await {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::warn!(error = %err, "steady-state status poll failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydroview_domain::command::{FanCommand, HeaterCommand, LightsCommand, PumpCommand};
    use hydroview_domain::status::Reading;
    use std::cell::Cell;
    use std::future::Future;
    use std::rc::Rc;

    /// Fake device that can be told to fail either GET endpoint with an
    /// HTTP 500, counting status calls through a shared handle.
    #[derive(Default)]
    struct FakeDeviceApi {
        fail_status: bool,
        fail_config: bool,
        status_calls: Rc<Cell<u32>>,
    }

    fn http_500() -> DeviceError {
        DeviceError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }
    }

    fn sample_status() -> DeviceStatus {
        DeviceStatus {
            temperature: Reading::new(21.5),
            wifi_connected: true,
            ..DeviceStatus::default()
        }
    }

    fn sample_config() -> DeviceConfig {
        DeviceConfig {
            lights_start_s: 21_600,
            lights_end_s: 72_000,
            pump_on_sec: 30,
            pump_period: 1_800,
            humidity_mode: false,
            heater_setpoint_c: 22.0,
            humidity_threshold: 70.0,
        }
    }

    impl DeviceApi for FakeDeviceApi {
        fn fetch_status(&self) -> impl Future<Output = Result<DeviceStatus, DeviceError>> {
            self.status_calls.set(self.status_calls.get() + 1);
            let result = if self.fail_status {
                Err(http_500())
            } else {
                Ok(sample_status())
            };
            async move { result }
        }

        fn fetch_config(&self) -> impl Future<Output = Result<DeviceConfig, DeviceError>> {
            let result = if self.fail_config {
                Err(http_500())
            } else {
                Ok(sample_config())
            };
            async move { result }
        }

        fn send_lights(
            &self,
            _command: &LightsCommand,
        ) -> impl Future<Output = Result<(), DeviceError>> {
            async { Ok(()) }
        }

        fn send_pump(
            &self,
            _command: &PumpCommand,
        ) -> impl Future<Output = Result<(), DeviceError>> {
            async { Ok(()) }
        }

        fn send_heater(
            &self,
            _command: &HeaterCommand,
        ) -> impl Future<Output = Result<(), DeviceError>> {
            async { Ok(()) }
        }

        fn send_fan(
            &self,
            _command: &FanCommand,
        ) -> impl Future<Output = Result<(), DeviceError>> {
            async { Ok(()) }
        }

        fn save_config(&self) -> impl Future<Output = Result<(), DeviceError>> {
            async { Ok(()) }
        }
    }

    #[tokio::test]
    async fn should_combine_status_and_config_on_initialize() {
        let svc = SyncService::new(FakeDeviceApi::default());
        let snapshot = svc.initialize().await.unwrap();
        assert_eq!(snapshot.status, sample_status());
        assert_eq!(snapshot.config, sample_config());
    }

    #[tokio::test]
    async fn should_fail_initialize_when_status_fetch_fails() {
        let svc = SyncService::new(FakeDeviceApi {
            fail_status: true,
            ..FakeDeviceApi::default()
        });
        assert!(svc.initialize().await.is_err());
    }

    #[tokio::test]
    async fn should_fail_initialize_when_config_fetch_fails() {
        let svc = SyncService::new(FakeDeviceApi {
            fail_config: true,
            ..FakeDeviceApi::default()
        });
        assert!(svc.initialize().await.is_err());
    }

    #[tokio::test]
    async fn should_return_snapshot_on_successful_poll() {
        let svc = SyncService::new(FakeDeviceApi::default());
        assert_eq!(svc.poll_status().await, Some(sample_status()));
    }

    #[tokio::test]
    async fn should_swallow_poll_failure_without_notification() {
        // Steady-state failures are logged only; the return type leaves the
        // caller nothing to surface, so no notification can be produced.
        let svc = SyncService::new(FakeDeviceApi {
            fail_status: true,
            ..FakeDeviceApi::default()
        });
        assert_eq!(svc.poll_status().await, None);
    }

    #[tokio::test]
    async fn should_let_overlapping_ticks_proceed_independently() {
        let api = FakeDeviceApi::default();
        let calls = Rc::clone(&api.status_calls);
        let svc = SyncService::new(api);

        let (first, second) = tokio::join!(svc.poll_status(), svc.poll_status());
        assert!(first.is_some());
        assert!(second.is_some());
        assert_eq!(calls.get(), 2);
    }
}
