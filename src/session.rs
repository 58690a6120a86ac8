//! Session store boundary.
//!
//! The external auth layer persists the signed-in user under the
//! `user` key in `localStorage`. This module only reads and clears
//! that entry; it never issues or refreshes credentials.

use serde::{Deserialize, Serialize};
use web_sys::console;

use crate::models::Role;

const STORAGE_KEY: &str = "user";

/// Signed-in user as persisted by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Older payloads use `id`, newer ones `user_id`.
    #[serde(alias = "user_id")]
    pub id: u32,
    pub username: String,
    pub role: Role,
    pub token: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Read the session from `localStorage`, if any. A malformed entry
    /// is treated as signed-out.
    pub fn load() -> Option<Session> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                console::warn_1(&format!("[session] malformed session entry: {e}").into());
                None
            }
        }
    }

    /// Drop the local session entry.
    pub fn clear() {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_id_field_spellings() {
        let a: Session = serde_json::from_str(
            r#"{"id":3,"username":"ana","role":"admin","token":"t"}"#,
        )
        .unwrap();
        let b: Session = serde_json::from_str(
            r#"{"user_id":3,"username":"ana","role":"admin","token":"t"}"#,
        )
        .unwrap();
        assert_eq!(a, b);
        assert!(a.is_admin());
    }
}
