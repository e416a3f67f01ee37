//! Read-only status panel — sensor readings and actuator indicators.

use leptos::prelude::*;

use hydroview_app::model::DashboardModel;

/// A card displaying one labelled sensor reading.
#[component]
fn SensorCard(
    /// The label shown above the reading.
    #[prop(into)]
    label: String,
    /// Reactive display text for the reading.
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="sensor-card">
            <span class="sensor-label">{label}</span>
            <span class="sensor-value">{value}</span>
        </div>
    }
}

/// One actuator ON/OFF indicator.
#[component]
fn StatusIndicator(
    #[prop(into)] label: String,
    state: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="status-row">
            <span>{label}</span>
            <span class=move || {
                let modifier = match state.get() {
                    "ON" => "on",
                    "OFF" => "off",
                    _ => "unknown",
                };
                format!("status-indicator {modifier}")
            }>{state}</span>
        </div>
    }
}

/// The full read-only panel, refreshed by every poll tick.
#[component]
pub fn StatusPanel(model: RwSignal<DashboardModel>) -> impl IntoView {
    view! {
        <section class="status-panel">
            <div class="sensor-grid">
                <SensorCard
                    label="Water temperature"
                    value=Signal::derive(move || model.with(DashboardModel::temperature_text))
                />
                <SensorCard
                    label="Humidity"
                    value=Signal::derive(move || model.with(DashboardModel::humidity_text))
                />
                <SensorCard
                    label="Air temperature"
                    value=Signal::derive(move || model.with(DashboardModel::air_temperature_text))
                />
                <SensorCard
                    label="Air humidity"
                    value=Signal::derive(move || model.with(DashboardModel::air_humidity_text))
                />
                <SensorCard
                    label="pH"
                    value=Signal::derive(move || model.with(DashboardModel::ph_text))
                />
                <SensorCard
                    label="TDS"
                    value=Signal::derive(move || model.with(DashboardModel::tds_text))
                />
            </div>
            <div class="device-grid">
                <StatusIndicator
                    label="Lights"
                    state=Signal::derive(move || model.with(DashboardModel::lights_indicator))
                />
                <StatusIndicator
                    label="Pump"
                    state=Signal::derive(move || model.with(DashboardModel::pump_indicator))
                />
                <StatusIndicator
                    label="Heater"
                    state=Signal::derive(move || model.with(DashboardModel::heater_indicator))
                />
                <StatusIndicator
                    label="Fan"
                    state=Signal::derive(move || model.with(DashboardModel::fan_indicator))
                />
            </div>
            <div class="link-status">
                <span>"Wi-Fi: " {move || model.with(DashboardModel::wifi_text)}</span>
                <span>"Time: " {move || model.with(DashboardModel::time_sync_text)}</span>
            </div>
        </section>
    }
}
