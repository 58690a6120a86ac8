//! Vulnerability stats endpoint.

use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::models::Vulnerability;

/// `{ total, vulnerabilities: [...] }` page from the stats endpoint.
/// `total` is authoritative when present.
#[derive(Debug, Clone, Deserialize)]
pub struct VulnPage {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl ApiClient {
    /// `GET /stats/vulnerabilidades/?page=&limit=`.
    pub async fn list_vulnerabilities(
        &self,
        page: usize,
        limit: usize,
    ) -> Result<VulnPage, ApiError> {
        self.get_json_query("/stats/vulnerabilidades/", &[("page", page), ("limit", limit)])
            .await
    }
}
