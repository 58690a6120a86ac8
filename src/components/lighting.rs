//! Lighting Panel Component
//!
//! Simulated light controls for the four demo rooms. State is pure
//! client memory owned by this panel; every mutation emits a banner.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::devices::{LightsState, Room};

#[component]
pub fn LightingPanel() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;
    let lights = RwSignal::new(LightsState::default());

    let set_all = move |on: bool| {
        let msg = lights.try_update(|l| l.set_all(on)).unwrap_or_default();
        notifier.success(msg);
    };

    view! {
        <section class="panel lighting-panel">
            <h2>"Iluminación"</h2>
            <div class="panel-actions">
                <button class="btn" on:click=move |_| set_all(true)>"Todas encendidas"</button>
                <button class="btn" on:click=move |_| set_all(false)>"Todas apagadas"</button>
            </div>
            <div class="device-grid">
                {Room::ALL
                    .iter()
                    .map(|&room| view! { <LightCard room lights /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn LightCard(room: Room, lights: RwSignal<LightsState>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;

    let on_toggle = move |ev: web_sys::Event| {
        let on = event_target_checked(&ev);
        let msg = lights.try_update(|l| l.toggle(room, on)).unwrap_or_default();
        notifier.success(msg);
    };

    let on_brightness = move |ev: web_sys::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<i32>() {
            lights.update(|l| {
                l.set_brightness(room, value);
            });
        }
    };

    view! {
        <div class="device-card" data-room=room.key()>
            <h3>{room.label()}</h3>
            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=move || lights.with(|l| l.light(room).on)
                    on:change=on_toggle
                />
                <span class="slider"></span>
            </label>
            <div class="brightness-row">
                <input
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || lights.with(|l| l.light(room).brightness.to_string())
                    on:input=on_brightness
                />
                <span class="brightness-value">
                    {move || format!("{}%", lights.with(|l| l.light(room).brightness))}
                </span>
            </div>
            {(room == Room::LivingRoom).then(|| view! {
                <select
                    class="light-option"
                    prop:value=move || lights.with(|l| l.living_room_color.clone())
                    on:change=move |ev| {
                        let msg = lights
                            .try_update(|l| l.set_color(&event_target_value(&ev)))
                            .unwrap_or_default();
                        notifier.success(msg);
                    }
                >
                    <option value="neutral">"Neutral"</option>
                    <option value="warm">"Cálida"</option>
                    <option value="cold">"Fría"</option>
                </select>
            })}
            {(room == Room::Bedroom).then(|| view! {
                <select
                    class="light-option"
                    prop:value=move || lights.with(|l| l.bedroom_mode.clone())
                    on:change=move |ev| {
                        let msg = lights
                            .try_update(|l| l.set_mode(&event_target_value(&ev)))
                            .unwrap_or_default();
                        notifier.success(msg);
                    }
                >
                    <option value="reading">"Lectura"</option>
                    <option value="relax">"Relajación"</option>
                    <option value="bright">"Brillante"</option>
                </select>
            })}
        </div>
    }
}
