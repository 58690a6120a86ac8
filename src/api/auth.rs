//! Auth collaborator boundary.
//!
//! Session issuance lives entirely outside this app; the only call we
//! make is the best-effort server-side logout.

use web_sys::console;

use super::ApiClient;

impl ApiClient {
    /// `GET /auth/logout`. Failures are logged and ignored; the local
    /// session is cleared regardless. The response body is not read.
    pub async fn logout(&self) {
        let result = self.send(self.http().get(self.url("/auth/logout"))).await;
        if let Err(e) = result {
            console::warn_1(&format!("[auth] logout request failed: {e}").into());
        }
    }
}
