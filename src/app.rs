//! Domus Admin Frontend App
//!
//! Root component: session gate, app context, navbar, and view
//! switching with URL-hash sync.

use leptos::prelude::*;
use web_sys::console;

use crate::components::{
    ClimatePanel, LightingPanel, Navbar, NotificationArea, ProfileView, SecurityPanel,
    UsersView, View, VulnsView,
};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    match Session::load() {
        Some(session) => view! { <Dashboard session /> }.into_any(),
        None => view! {
            <div class="login-required">
                <h1>"Domus"</h1>
                <p>"Debes iniciar sesión para acceder al panel."</p>
                <a href="index.html">"Ir al inicio de sesión"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Dashboard(session: Session) -> impl IntoView {
    console::log_1(&format!("[app] dashboard loaded for {}", session.username).into());

    let is_admin = session.is_admin();
    provide_context(AppContext::new(ApiConfig::default(), session));

    let active_view = RwSignal::new(initial_view(is_admin));

    // Mirror the active view into the URL hash.
    Effect::new(move |_| {
        let view = active_view.get();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(view.hash_key());
        }
    });

    view! {
        <div class="app-layout">
            <Navbar active_view />
            <NotificationArea />
            <main class="main-content">
                {move || match active_view.get() {
                    View::Lighting => view! { <LightingPanel /> }.into_any(),
                    View::Climate => view! { <ClimatePanel /> }.into_any(),
                    View::Security => view! { <SecurityPanel /> }.into_any(),
                    View::Profile => view! { <ProfileView /> }.into_any(),
                    // Hash edits can land here without the tab.
                    View::Users | View::Vulnerabilities if !is_admin => {
                        view! { <ProfileView /> }.into_any()
                    }
                    View::Users => view! { <UsersView /> }.into_any(),
                    View::Vulnerabilities => view! { <VulnsView /> }.into_any(),
                }}
            </main>
        </div>
    }
}

fn initial_view(is_admin: bool) -> View {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .and_then(|hash| View::from_hash(hash.trim_start_matches('#')))
        .filter(|v| v.visible_for(is_admin))
        .unwrap_or(View::Lighting)
}
