//! Navbar Component
//!
//! Top navigation: signed-in user info, view tabs, and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::session::Session;

/// The dashboard views. Selection is mirrored into the URL hash.
/// Management views are admin-only; `Profile` replaces them for
/// everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Lighting,
    Climate,
    Security,
    Users,
    Vulnerabilities,
    Profile,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Lighting,
        View::Climate,
        View::Security,
        View::Users,
        View::Vulnerabilities,
        View::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Lighting => "Iluminación",
            View::Climate => "Climatización",
            View::Security => "Seguridad",
            View::Users => "Usuarios",
            View::Vulnerabilities => "Vulnerabilidades",
            View::Profile => "Mi Perfil",
        }
    }

    pub fn hash_key(&self) -> &'static str {
        match self {
            View::Lighting => "iluminacion",
            View::Climate => "climatizacion",
            View::Security => "seguridad",
            View::Users => "usuarios",
            View::Vulnerabilities => "vulnerabilidades",
            View::Profile => "perfil",
        }
    }

    pub fn from_hash(hash: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.hash_key() == hash)
    }

    /// Whether this tab is offered to the given role.
    pub fn visible_for(&self, is_admin: bool) -> bool {
        match self {
            View::Users | View::Vulnerabilities => is_admin,
            View::Profile => !is_admin,
            View::Lighting | View::Climate | View::Security => true,
        }
    }
}

#[component]
pub fn Navbar(active_view: RwSignal<View>) -> impl IntoView {
    let ctx = use_app_context();
    let username = ctx.session.username.clone();
    let role_label = ctx.session.role.label();
    let is_admin = ctx.session.is_admin();
    let api = ctx.api.clone();

    // Server-side logout is best effort; the local session always goes.
    let on_logout = move |_| {
        let api = api.clone();
        spawn_local(async move {
            api.logout().await;
            Session::clear();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("index.html");
            }
        });
    };

    view! {
        <nav class="navbar">
            <div class="navbar-brand">"Domus"</div>
            <div class="navbar-tabs">
                {View::ALL
                    .iter()
                    .filter(|v| v.visible_for(is_admin))
                    .map(|&v| {
                        let tab_class = move || {
                            if active_view.get() == v { "nav-item active" } else { "nav-item" }
                        };
                        view! {
                            <button class=tab_class on:click=move |_| active_view.set(v)>
                                {v.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="navbar-user">
                <span class="user-name">{username}</span>
                <span class="user-role">{role_label}</span>
                <button class="btn-logout" on:click=on_logout>"Salir"</button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_keys_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_hash(view.hash_key()), Some(view));
        }
        assert_eq!(View::from_hash("nonsense"), None);
    }

    #[test]
    fn management_tabs_are_admin_only() {
        let admin_tabs: Vec<_> =
            View::ALL.into_iter().filter(|v| v.visible_for(true)).collect();
        let user_tabs: Vec<_> =
            View::ALL.into_iter().filter(|v| v.visible_for(false)).collect();

        assert!(admin_tabs.contains(&View::Users));
        assert!(admin_tabs.contains(&View::Vulnerabilities));
        assert!(!admin_tabs.contains(&View::Profile));

        assert!(!user_tabs.contains(&View::Users));
        assert!(!user_tabs.contains(&View::Vulnerabilities));
        assert!(user_tabs.contains(&View::Profile));
        // The device panels are always offered.
        for v in [View::Lighting, View::Climate, View::Security] {
            assert!(admin_tabs.contains(&v));
            assert!(user_tabs.contains(&v));
        }
    }
}
