//! User management endpoints.
//!
//! Canonical update contract: `PUT /users/{id}` with a JSON body
//! `{"role": ...}`. The query-parameter variant (`?new_role=`) found in
//! older clients is deprecated and not used here.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{Role, User};

#[derive(Serialize)]
struct RoleUpdate {
    role: Role,
}

impl ApiClient {
    /// One page of users via `GET /users/?skip=&limit=`. The backend
    /// returns a bare array with no total count.
    pub async fn list_users(&self, skip: usize, limit: usize) -> Result<Vec<User>, ApiError> {
        self.get_json_query("/users/", &[("skip", skip), ("limit", limit)])
            .await
    }

    /// `GET /users/{id}`.
    pub async fn get_user(&self, id: u32) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{id}")).await
    }

    /// `PUT /users/{id}` with body `{"role": ...}`; returns the
    /// updated user.
    pub async fn update_role(&self, id: u32, role: Role) -> Result<User, ApiError> {
        self.put_json(&format!("/users/{id}"), &RoleUpdate { role })
            .await
    }

    /// `DELETE /users/{id}`; 204 on success, `{detail}` error body
    /// otherwise.
    pub async fn delete_user(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/users/{id}")).await
    }
}
