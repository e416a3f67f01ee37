//! Editable control forms — lights, pump, heater, fan, and the config
//! load/save actions.
//!
//! Submissions are fully independent: each spawns its own task, nothing is
//! disabled while a request is in flight, and two quick submissions to the
//! same form proceed as concurrent requests. Every submission surfaces
//! exactly one toast.

use leptos::prelude::*;
use leptos::task::spawn_local;

use hydroview_app::model::DashboardModel;
use hydroview_app::services::UpdateService;
use hydroview_domain::command::{FanState, PumpMode};

use crate::api::HttpDeviceApi;
use crate::components::toast::use_toasts;

fn dispatcher() -> UpdateService<HttpDeviceApi> {
    UpdateService::new(HttpDeviceApi)
}

/// Lights schedule form: two "HH:MM" fields.
#[component]
pub fn LightsCard(model: RwSignal<DashboardModel>) -> impl IntoView {
    let toasts = use_toasts();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = model.with_untracked(|m| m.lights.clone());
        spawn_local(async move {
            toasts.push(dispatcher().update_lights(&form).await);
        });
    };

    view! {
        <form class="control-card" on:submit=on_submit>
            <h2>"Lights"</h2>
            <label>
                "On at"
                <input
                    type="time"
                    prop:value=move || model.with(|m| m.lights.start.clone())
                    on:input=move |ev| {
                        model.update(|m| m.lights.start = event_target_value(&ev));
                    }
                />
            </label>
            <label>
                "Off at"
                <input
                    type="time"
                    prop:value=move || model.with(|m| m.lights.end.clone())
                    on:input=move |ev| {
                        model.update(|m| m.lights.end = event_target_value(&ev));
                    }
                />
            </label>
            <button type="submit">"Update schedule"</button>
        </form>
    }
}

/// Pump settings form. The humidity controls toggle with the selected mode;
/// the timer fields stay in the DOM either way, only visibility changes.
#[component]
pub fn PumpCard(model: RwSignal<DashboardModel>) -> impl IntoView {
    let toasts = use_toasts();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = model.with_untracked(|m| m.pump.clone());
        spawn_local(async move {
            toasts.push(dispatcher().update_pump(&form).await);
        });
    };

    view! {
        <form class="control-card" on:submit=on_submit>
            <h2>"Pump"</h2>
            <label>
                "Mode"
                <select
                    prop:value=move || model.with(|m| m.pump.mode.to_string())
                    on:change=move |ev| {
                        let mode: PumpMode = event_target_value(&ev).parse().unwrap_or_default();
                        model.update(|m| m.set_pump_mode(mode));
                    }
                >
                    <option value="timer">"Timer"</option>
                    <option value="humidity">"Humidity"</option>
                </select>
            </label>
            <label>
                "On seconds"
                <input
                    type="number"
                    prop:value=move || model.with(|m| m.pump.on_sec.clone())
                    on:input=move |ev| {
                        model.update(|m| m.pump.on_sec = event_target_value(&ev));
                    }
                />
            </label>
            <label>
                "Period (s)"
                <input
                    type="number"
                    prop:value=move || model.with(|m| m.pump.period.clone())
                    on:input=move |ev| {
                        model.update(|m| m.pump.period = event_target_value(&ev));
                    }
                />
            </label>
            <label style:display=move || {
                if model.with(|m| m.humidity_controls_visible) { "block" } else { "none" }
            }>
                "Humidity threshold (%)"
                <input
                    type="number"
                    step="0.1"
                    prop:value=move || model.with(|m| m.pump.humidity_threshold.clone())
                    on:input=move |ev| {
                        model.update(|m| m.pump.humidity_threshold = event_target_value(&ev));
                    }
                />
            </label>
            <button type="submit">"Update pump"</button>
        </form>
    }
}

/// Heater setpoint form.
#[component]
pub fn HeaterCard(model: RwSignal<DashboardModel>) -> impl IntoView {
    let toasts = use_toasts();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = model.with_untracked(|m| m.heater.clone());
        spawn_local(async move {
            toasts.push(dispatcher().update_heater(&form).await);
        });
    };

    view! {
        <form class="control-card" on:submit=on_submit>
            <h2>"Heater"</h2>
            <label>
                "Setpoint (°C)"
                <input
                    type="number"
                    step="0.1"
                    prop:value=move || model.with(|m| m.heater.setpoint.clone())
                    on:input=move |ev| {
                        model.update(|m| m.heater.setpoint = event_target_value(&ev));
                    }
                />
            </label>
            <button type="submit">"Update heater"</button>
        </form>
    }
}

/// Fan state form.
#[component]
pub fn FanCard(model: RwSignal<DashboardModel>) -> impl IntoView {
    let toasts = use_toasts();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = model.with_untracked(|m| m.fan);
        spawn_local(async move {
            toasts.push(dispatcher().update_fan(&form).await);
        });
    };

    view! {
        <form class="control-card" on:submit=on_submit>
            <h2>"Fan"</h2>
            <label>
                "State"
                <select
                    prop:value=move || model.with(|m| m.fan.state.to_string())
                    on:change=move |ev| {
                        let state: FanState = event_target_value(&ev).parse().unwrap_or_default();
                        model.update(|m| m.fan.state = state);
                    }
                >
                    <option value="auto">"Auto"</option>
                    <option value="on">"On"</option>
                    <option value="off">"Off"</option>
                </select>
            </label>
            <button type="submit">"Update fan"</button>
        </form>
    }
}

/// Explicit config load/save actions. Both always report one toast, unlike
/// the silent background poll.
#[component]
pub fn ConfigActions(model: RwSignal<DashboardModel>) -> impl IntoView {
    let toasts = use_toasts();

    let on_save = move |_| {
        spawn_local(async move {
            toasts.push(dispatcher().save_config().await);
        });
    };
    let on_load = move |_| {
        spawn_local(async move {
            let (config, note) = dispatcher().load_config().await;
            if let Some(config) = config {
                model.update(|m| m.apply_config(&config));
            }
            toasts.push(note);
        });
    };

    view! {
        <div class="config-actions">
            <button on:click=on_save>"Save configuration"</button>
            <button on:click=on_load>"Load configuration"</button>
        </div>
    }
}
