//! Security Panel Component
//!
//! Alarm arm/disarm plus a read-only sensor list over simulated state.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::devices::SecurityState;
use crate::notify::Level;

#[component]
pub fn SecurityPanel() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;
    let security = RwSignal::new(SecurityState::default());

    let set_alarm = move |armed: bool| {
        let msg = security.try_update(|s| s.set_alarm(armed)).unwrap_or_default();
        // Arming is the one state change worth a louder banner.
        let level = if armed { Level::Warning } else { Level::Success };
        notifier.notify(level, msg);
    };

    let status_class = move || {
        if security.with(|s| s.alarm_armed) {
            "alarm-status armed"
        } else {
            "alarm-status disarmed"
        }
    };

    view! {
        <section class="panel security-panel">
            <h2>"Seguridad"</h2>
            <div class=status_class>
                <span>{move || security.with(|s| s.status_label())}</span>
            </div>
            <div class="panel-actions">
                <button class="btn btn-danger" on:click=move |_| set_alarm(true)>
                    "Activar alarma"
                </button>
                <button class="btn btn-secondary" on:click=move |_| set_alarm(false)>
                    "Desactivar alarma"
                </button>
            </div>
            <ul class="sensor-list">
                <li>
                    <span class="sensor-name">"Puerta principal"</span>
                    <span class="sensor-state">{move || security.with(|s| s.door_sensor)}</span>
                </li>
                <li>
                    <span class="sensor-name">"Ventanas"</span>
                    <span class="sensor-state">{move || security.with(|s| s.window_sensor)}</span>
                </li>
                <li>
                    <span class="sensor-name">"Cámara"</span>
                    <span class="sensor-state">{move || security.with(|s| s.camera)}</span>
                </li>
            </ul>
        </section>
    }
}
