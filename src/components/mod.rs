//! UI Components
//!
//! Leptos components for the dashboard views.

mod climate;
mod confirm_dialog;
mod lighting;
mod nav;
mod notifications;
mod profile_view;
mod security;
mod user_modal;
mod users_view;
mod vulns_view;

pub use climate::ClimatePanel;
pub use lighting::LightingPanel;
pub use nav::{Navbar, View};
pub use notifications::NotificationArea;
pub use profile_view::ProfileView;
pub use security::SecurityPanel;
pub use users_view::UsersView;
pub use vulns_view::VulnsView;
