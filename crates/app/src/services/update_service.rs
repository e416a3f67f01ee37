//! Update dispatch — per-domain form submission handlers.
//!
//! Each handler reads one form, converts it into its wire command (failing
//! fast on malformed input, before any request is issued), POSTs it, and
//! yields **exactly one** notification reflecting its own outcome. Handlers
//! are fully independent: concurrent submissions — including to the same form
//! — share no lock and are never coalesced. The explicit config load and save
//! actions live here too, because unlike the steady-state poll they always
//! report to the operator.

use std::future::Future;

use hydroview_domain::command::{FanCommand, HeaterCommand, LightsCommand, PumpCommand};
use hydroview_domain::config::DeviceConfig;
use hydroview_domain::error::DeviceError;
use hydroview_domain::notification::Notification;

use crate::model::{FanForm, HeaterForm, LightsForm, PumpForm};
use crate::ports::DeviceApi;

/// Use-cases for relaying operator edits to the device.
pub struct UpdateService<A> {
    api: A,
}

impl<A: DeviceApi> UpdateService<A> {
    /// Create a new service backed by the given device API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Submit the lights schedule form.
    pub async fn update_lights(&self, form: &LightsForm) -> Notification {
        let op = async {
            let command = LightsCommand::parse(&form.start, &form.end)?;
            self.api.send_lights(&command).await
        };
        self.report(
            op,
            "Lights schedule updated successfully",
            "Failed to update lights schedule",
        )
        .await
    }

    /// Submit the pump settings form. All four fields travel regardless of
    /// mode; the device ignores the inapplicable subset.
    pub async fn update_pump(&self, form: &PumpForm) -> Notification {
        let op = async {
            let command = PumpCommand::parse(
                form.mode,
                &form.on_sec,
                &form.period,
                &form.humidity_threshold,
            )?;
            self.api.send_pump(&command).await
        };
        self.report(
            op,
            "Pump settings updated successfully",
            "Failed to update pump settings",
        )
        .await
    }

    /// Submit the heater setpoint form.
    pub async fn update_heater(&self, form: &HeaterForm) -> Notification {
        let op = async {
            let command = HeaterCommand::parse(&form.setpoint)?;
            self.api.send_heater(&command).await
        };
        self.report(
            op,
            "Heater setpoint updated successfully",
            "Failed to update heater setpoint",
        )
        .await
    }

    /// Submit the fan state form.
    pub async fn update_fan(&self, form: &FanForm) -> Notification {
        let command = FanCommand::new(form.state);
        let op = self.api.send_fan(&command);
        self.report(
            op,
            "Fan state updated successfully",
            "Failed to update fan state",
        )
        .await
    }

    /// Ask the device to persist its applied settings (`POST /api/save`).
    pub async fn save_config(&self) -> Notification {
        self.report(
            self.api.save_config(),
            "Configuration saved successfully",
            "Failed to save configuration",
        )
        .await
    }

    /// Explicitly re-fetch the device configuration.
    ///
    /// Returns the config for the caller to apply to the dashboard model,
    /// alongside the single notification for this action.
    pub async fn load_config(&self) -> (Option<DeviceConfig>, Notification) {
        match self.api.fetch_config().await {
            Ok(config) => (
                Some(config),
                Notification::success("Configuration loaded successfully"),
            ),
            Err(err) => {
                tracing::error!(error = %err, "failed to load configuration");
                (None, Notification::error("Failed to load configuration"))
            }
        }
    }

    async fn report<F>(&self, op: F, success: &'static str, failure: &'static str) -> Notification
    where
        F: Future<Output = Result<(), DeviceError>>,
    {
        match op.await {
            Ok(()) => Notification::success(success),
            Err(err) => {
                tracing::error!(error = %err, "{failure}");
                Notification::error(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydroview_domain::command::{FanState, PumpMode};
    use hydroview_domain::notification::Severity;
    use hydroview_domain::status::DeviceStatus;
    use std::cell::RefCell;

    /// Fake device recording every command it receives; POSTs can be made to
    /// fail with an HTTP 500.
    #[derive(Default)]
    struct RecordingDeviceApi {
        fail: bool,
        lights: RefCell<Vec<LightsCommand>>,
        pumps: RefCell<Vec<PumpCommand>>,
        heaters: RefCell<Vec<HeaterCommand>>,
        fans: RefCell<Vec<FanCommand>>,
        saves: RefCell<u32>,
    }

    fn http_500() -> DeviceError {
        DeviceError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }
    }

    impl RecordingDeviceApi {
        fn outcome(&self) -> Result<(), DeviceError> {
            if self.fail { Err(http_500()) } else { Ok(()) }
        }
    }

    impl DeviceApi for RecordingDeviceApi {
        fn fetch_status(&self) -> impl Future<Output = Result<DeviceStatus, DeviceError>> {
            async { Ok(DeviceStatus::default()) }
        }

        fn fetch_config(&self) -> impl Future<Output = Result<DeviceConfig, DeviceError>> {
            let result = if self.fail {
                Err(http_500())
            } else {
                Ok(DeviceConfig {
                    humidity_mode: true,
                    ..DeviceConfig::default()
                })
            };
            async move { result }
        }

        fn send_lights(
            &self,
            command: &LightsCommand,
        ) -> impl Future<Output = Result<(), DeviceError>> {
            self.lights.borrow_mut().push(command.clone());
            let result = self.outcome();
            async move { result }
        }

        fn send_pump(
            &self,
            command: &PumpCommand,
        ) -> impl Future<Output = Result<(), DeviceError>> {
            self.pumps.borrow_mut().push(command.clone());
            let result = self.outcome();
            async move { result }
        }

        fn send_heater(
            &self,
            command: &HeaterCommand,
        ) -> impl Future<Output = Result<(), DeviceError>> {
            self.heaters.borrow_mut().push(command.clone());
            let result = self.outcome();
            async move { result }
        }

        fn send_fan(&self, command: &FanCommand) -> impl Future<Output = Result<(), DeviceError>> {
            self.fans.borrow_mut().push(*command);
            let result = self.outcome();
            async move { result }
        }

        fn save_config(&self) -> impl Future<Output = Result<(), DeviceError>> {
            *self.saves.borrow_mut() += 1;
            let result = self.outcome();
            async move { result }
        }
    }

    fn lights_form(start: &str, end: &str) -> LightsForm {
        LightsForm {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[tokio::test]
    async fn should_send_normalized_lights_schedule() {
        let svc = UpdateService::new(RecordingDeviceApi::default());
        let note = svc.update_lights(&lights_form("6:00", "20:5")).await;

        assert_eq!(note.severity, Severity::Success);
        let sent = svc.api.lights.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].start_time, "06:00");
        assert_eq!(sent[0].end_time, "20:05");
    }

    #[tokio::test]
    async fn should_reject_malformed_lights_time_without_request() {
        let svc = UpdateService::new(RecordingDeviceApi::default());
        let note = svc.update_lights(&lights_form("dawn", "20:00")).await;

        assert_eq!(note.severity, Severity::Error);
        assert!(svc.api.lights.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_transmit_humidity_threshold_in_timer_mode() {
        let svc = UpdateService::new(RecordingDeviceApi::default());
        let form = PumpForm {
            mode: PumpMode::Timer,
            on_sec: "30".to_string(),
            period: "1800".to_string(),
            humidity_threshold: "70.5".to_string(),
        };

        let note = svc.update_pump(&form).await;

        assert_eq!(note.severity, Severity::Success);
        let sent = svc.api.pumps.borrow();
        assert_eq!(sent[0].mode, PumpMode::Timer);
        assert!((sent[0].humidity_threshold - 70.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_reject_malformed_pump_numbers_without_request() {
        let svc = UpdateService::new(RecordingDeviceApi::default());
        let form = PumpForm {
            mode: PumpMode::Humidity,
            on_sec: "thirty".to_string(),
            period: "1800".to_string(),
            humidity_threshold: "70".to_string(),
        };

        let note = svc.update_pump(&form).await;

        assert_eq!(note.severity, Severity::Error);
        assert!(svc.api.pumps.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_report_error_when_device_rejects_heater_update() {
        let svc = UpdateService::new(RecordingDeviceApi {
            fail: true,
            ..RecordingDeviceApi::default()
        });
        let form = HeaterForm {
            setpoint: "22.5".to_string(),
        };

        let note = svc.update_heater(&form).await;

        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.message, "Failed to update heater setpoint");
        // The request was issued; only the response failed.
        assert_eq!(svc.api.heaters.borrow().len(), 1);
    }

    #[tokio::test]
    async fn should_send_fan_state() {
        let svc = UpdateService::new(RecordingDeviceApi::default());
        let note = svc
            .update_fan(&FanForm {
                state: FanState::Off,
            })
            .await;

        assert_eq!(note.severity, Severity::Success);
        assert_eq!(svc.api.fans.borrow()[0].state, FanState::Off);
    }

    #[tokio::test]
    async fn should_report_exactly_one_notification_per_save() {
        let svc = UpdateService::new(RecordingDeviceApi::default());
        let note = svc.save_config().await;

        assert_eq!(note.severity, Severity::Success);
        assert_eq!(note.message, "Configuration saved successfully");
        assert_eq!(*svc.api.saves.borrow(), 1);
    }

    #[tokio::test]
    async fn should_report_single_error_when_explicit_load_fails() {
        let svc = UpdateService::new(RecordingDeviceApi {
            fail: true,
            ..RecordingDeviceApi::default()
        });

        let (config, note) = svc.load_config().await;

        assert!(config.is_none());
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.message, "Failed to load configuration");
    }

    #[tokio::test]
    async fn should_return_config_on_successful_load() {
        let svc = UpdateService::new(RecordingDeviceApi::default());
        let (config, note) = svc.load_config().await;

        assert!(config.unwrap().humidity_mode);
        assert_eq!(note.severity, Severity::Success);
    }

    #[tokio::test]
    async fn should_let_concurrent_submissions_proceed_independently() {
        let svc = UpdateService::new(RecordingDeviceApi::default());
        let form = HeaterForm {
            setpoint: "21".to_string(),
        };

        let (first, second) = tokio::join!(svc.update_heater(&form), svc.update_heater(&form));

        assert_eq!(first.severity, Severity::Success);
        assert_eq!(second.severity, Severity::Success);
        assert_eq!(svc.api.heaters.borrow().len(), 2);
    }
}
