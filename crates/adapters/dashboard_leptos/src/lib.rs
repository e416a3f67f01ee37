//! Browser dashboard for the hydroponic controller, built with Leptos (CSR).
//!
//! Responsibilities:
//!
//! - mount the component tree and own the [`DashboardModel`] signal;
//! - fetch the initial status/config snapshot, then poll status on a fixed
//!   interval (poll failures are logged and skipped, never toasted);
//! - wire form submissions to `hydroview-app` services and surface their
//!   notifications as toasts.
//!
//! Dependency rule: all device I/O goes through [`api::HttpDeviceApi`]
//! behind the `DeviceApi` port. Components never talk to `gloo-net`
//! directly.

pub mod api;
pub mod components;

use leptos::prelude::*;
use leptos::task::spawn_local;

use hydroview_app::model::DashboardModel;
use hydroview_app::services::{POLL_INTERVAL_MS, SyncService};
use hydroview_domain::notification::Notification;

use crate::api::HttpDeviceApi;
use crate::components::{
    ConfigActions, FanCard, HeaterCard, LightsCard, PumpCard, StatusPanel, ToastContainer,
    use_toasts,
};

/// Application root. Provides the toast context around the dashboard.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <Dashboard />
        </ToastContainer>
    }
}

/// The dashboard page: status panel, control cards, config actions.
///
/// On mount it loads the initial snapshot, then starts the status poll. The
/// interval handle is dropped on cleanup, which cancels the poll.
#[component]
fn Dashboard() -> impl IntoView {
    let model = RwSignal::new(DashboardModel::default());
    let toasts = use_toasts();

    spawn_local(async move {
        match SyncService::new(HttpDeviceApi).initialize().await {
            Ok(snapshot) => {
                model.update(|m| {
                    m.apply_status(snapshot.status);
                    m.apply_config(&snapshot.config);
                });
            }
            Err(err) => {
                leptos::logging::error!("initial snapshot failed: {err}");
                toasts.push(Notification::error("Failed to load initial data"));
            }
        }
    });

    let poll = gloo_timers::callback::Interval::new(POLL_INTERVAL_MS, move || {
        spawn_local(async move {
            if let Some(status) = SyncService::new(HttpDeviceApi).poll_status().await {
                model.update(|m| m.apply_status(status));
            }
        });
    });
    on_cleanup(move || drop(poll));

    view! {
        <main class="dashboard">
            <h1>"Hydroview"</h1>
            <StatusPanel model />
            <section class="controls-grid">
                <LightsCard model />
                <PumpCard model />
                <HeaterCard model />
                <FanCard model />
            </section>
            <ConfigActions model />
        </main>
    }
}
