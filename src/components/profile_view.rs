//! Profile View Component
//!
//! Read-only card non-admin users get instead of the management table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::context::use_app_context;
use crate::models::{format_date, User};

#[component]
pub fn ProfileView() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;
    let api = StoredValue::new(ctx.api.clone());
    let user_id = ctx.session.id;

    let (profile, set_profile) = signal::<Option<User>>(None);

    Effect::new(move |_| {
        let api = api.get_value();
        spawn_local(async move {
            match api.get_user(user_id).await {
                Ok(user) => set_profile.set(Some(user)),
                Err(e) => {
                    console::error_1(&format!("[profile] load failed: {e}").into());
                    notifier.error(format!("Error al cargar perfil: {e}"));
                }
            }
        });
    });

    view! {
        <section class="panel profile-view">
            <h2>"Mi Perfil"</h2>
            {move || match profile.get() {
                None => view! { <p class="loading-message">"Cargando perfil..."</p> }.into_any(),
                Some(user) => {
                    let email = user
                        .email
                        .clone()
                        .unwrap_or_else(|| "No especificado".to_string());
                    let created = format_date(user.created_at.as_deref());
                    view! {
                        <div class="profile-card">
                            <div class="profile-field">
                                <label>"Usuario:"</label>
                                <span>{user.username.clone()}</span>
                            </div>
                            <div class="profile-field">
                                <label>"Email:"</label>
                                <span>{email}</span>
                            </div>
                            <div class="profile-field">
                                <label>"Rol:"</label>
                                <span class=format!("role-badge {}", user.role.css_class())>
                                    {user.role.label()}
                                </span>
                            </div>
                            <div class="profile-field">
                                <label>"Cuenta creada:"</label>
                                <span>{created}</span>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
