//! Application Context
//!
//! Shared handles provided via the Leptos Context API: static config,
//! the signed-in session, the authenticated API client, and the
//! notification banner slot.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::notify::Notifier;
use crate::session::Session;

#[derive(Clone)]
pub struct AppContext {
    pub config: ApiConfig,
    pub session: Session,
    pub api: ApiClient,
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(config: ApiConfig, session: Session) -> Self {
        let api = ApiClient::new(&config, Some(session.token.clone()));
        Self {
            config,
            session,
            api,
            notifier: Notifier::new(),
        }
    }
}

/// Get the app context; panics if used outside `App`.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
