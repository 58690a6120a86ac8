//! Climate Panel Component
//!
//! Thermostat and AC controls over simulated state, plus the live
//! wall clock and ambient temperature readout.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::devices::{ClimateMode, ClimateState, MAX_TEMP, MIN_TEMP};

fn current_time_string() -> String {
    String::from(js_sys::Date::new_0().to_locale_time_string("es-ES"))
}

#[component]
pub fn ClimatePanel() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;
    let climate = RwSignal::new(ClimateState::default());

    let (now, set_now) = signal(current_time_string());
    // The interval must die with the panel; ticks after disposal would
    // write into a dead signal, hence `try_set`.
    let clock = StoredValue::new_local(Some(Interval::new(1_000, move || {
        set_now.try_set(current_time_string());
    })));
    on_cleanup(move || {
        if let Some(interval) = clock.try_update_value(|c| c.take()).flatten() {
            interval.cancel();
        }
    });

    let adjust = move |delta: i32| {
        let msg = climate.try_update(|c| c.adjust_target(delta)).unwrap_or_default();
        notifier.info(msg);
    };

    view! {
        <section class="panel climate-panel">
            <h2>"Climatización"</h2>
            <div class="climate-header">
                <span class="current-time">{move || now.get()}</span>
                <span class="current-temp">
                    {move || format!("{}°C", climate.with(|c| c.current))}
                </span>
            </div>

            <div class="thermostat">
                <button class="btn temp-btn" on:click=move |_| adjust(-1)>"-"</button>
                <span class="target-temp">
                    {move || format!("{}°C", climate.with(|c| c.target))}
                </span>
                <button class="btn temp-btn" on:click=move |_| adjust(1)>"+"</button>
            </div>

            <div class="mode-buttons">
                {ClimateMode::ALL
                    .iter()
                    .map(|&mode| {
                        let mode_class = move || {
                            if climate.with(|c| c.mode == mode) {
                                "btn-mode active"
                            } else {
                                "btn-mode"
                            }
                        };
                        view! {
                            <button
                                class=mode_class
                                data-mode=mode.key()
                                on:click=move |_| {
                                    let msg = climate
                                        .try_update(|c| c.set_mode(mode))
                                        .unwrap_or_default();
                                    notifier.success(msg);
                                }
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="device-card ac-card">
                <h3>"Aire acondicionado"</h3>
                <label class="switch">
                    <input
                        type="checkbox"
                        prop:checked=move || climate.with(|c| c.ac_power)
                        on:change=move |ev| {
                            let msg = climate
                                .try_update(|c| c.toggle_ac(event_target_checked(&ev)))
                                .unwrap_or_default();
                            notifier.success(msg);
                        }
                    />
                    <span class="slider"></span>
                </label>
                <div class="brightness-row">
                    <input
                        type="range"
                        min=MIN_TEMP.to_string()
                        max=MAX_TEMP.to_string()
                        prop:value=move || climate.with(|c| c.ac_temp.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                                climate.update(|c| {
                                    c.set_ac_temp(value);
                                });
                            }
                        }
                    />
                    <span class="ac-temp">
                        {move || format!("{}°C", climate.with(|c| c.ac_temp))}
                    </span>
                </div>
                <select
                    class="ac-mode"
                    prop:value=move || climate.with(|c| c.ac_mode.clone())
                    on:change=move |ev| {
                        let msg = climate
                            .try_update(|c| c.set_ac_mode(&event_target_value(&ev)))
                            .unwrap_or_default();
                        notifier.success(msg);
                    }
                >
                    <option value="cool">"Frío"</option>
                    <option value="heat">"Calor"</option>
                    <option value="fan">"Ventilador"</option>
                    <option value="dry">"Deshumidificar"</option>
                </select>
            </div>
        </section>
    }
}
