//! Static client configuration.
//!
//! Owned by the app root and handed to children through `AppContext`,
//! never read from ambient globals.

/// Knobs for the backend client and list views.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base path of the REST API, relative to the page origin.
    pub base_url: String,
    /// Deadline for every backend request.
    pub request_timeout_secs: u64,
    /// Rows per page in the user table.
    pub page_size: usize,
    /// Page size for the single-fetch vulnerability view.
    pub vuln_fetch_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            request_timeout_secs: 10,
            page_size: 10,
            vuln_fetch_limit: 1000,
        }
    }
}
