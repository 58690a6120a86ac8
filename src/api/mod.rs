//! Backend REST client.
//!
//! Thin wrapper over `reqwest` (the wasm backend delegates to the
//! browser fetch API). Handles bearer-token attachment, the request
//! timeout race, and status → `ApiError` mapping. Endpoint wrappers
//! live in the submodules as inherent methods on `ApiClient`.

mod error;
pub mod auth;
pub mod users;
pub mod vulns;

pub use error::ApiError;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;

/// Optional `{"detail": "..."}` body FastAPI-style backends attach to
/// 4xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Authenticated HTTP client for the dashboard backend.
///
/// Holds only plain data so it can live in signals and context on the
/// wasm target; the `reqwest::Client` itself is built per request
/// (on wasm it is a stateless handle over the browser fetch API).
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    timeout_secs: u64,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, token: Option<String>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
            timeout_secs: config.request_timeout_secs,
        }
    }

    fn http(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, racing it against the configured deadline.
    ///
    /// A hung request must never leave the UI in a perpetual loading
    /// state, so losing the race surfaces `ApiError::Timeout`.
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let request = Box::pin(builder.send());
        let deadline = Box::pin(TimeoutFuture::new((self.timeout_secs * 1000) as u32));
        let response = match select(request, deadline).await {
            Either::Left((result, _)) => result?,
            Either::Right(_) => {
                return Err(ApiError::Timeout {
                    timeout_secs: self.timeout_secs,
                })
            }
        };
        Self::check(response).await
    }

    /// Map non-2xx responses onto the error taxonomy, pulling the
    /// `{detail}` body out of 4xx responses when present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(response);
        }
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(ApiError::from_status(status, detail))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Deserialization {
                message: e.to_string(),
            })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http().get(self.url(path))).await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http().get(self.url(path)).query(query))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http().put(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    /// DELETE expecting 204 No Content (any 2xx accepted).
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http().delete(self.url(path))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = ApiConfig {
            base_url: "/api/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, None);
        assert_eq!(client.url("/users/3"), "/api/users/3");
    }
}
