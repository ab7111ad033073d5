use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config;

/// Every request shares the same budget, browser or native.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(target_arch = "wasm32")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Entry point for all backend and assistant traffic. Base URLs resolve
/// through the runtime config unless a test injects overrides.
#[derive(Clone, Default)]
pub struct ApiClient {
    base_url_override: Option<String>,
    assistant_url_override: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url_override: Some(base_url.into()),
            assistant_url_override: None,
        }
    }

    pub fn new_with_urls(base_url: impl Into<String>, assistant_url: impl Into<String>) -> Self {
        Self {
            base_url_override: Some(base_url.into()),
            assistant_url_override: Some(assistant_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(super) async fn resolved_assistant_url(&self) -> String {
        match &self.assistant_url_override {
            Some(url) => url.clone(),
            None => config::await_assistant_url().await,
        }
    }

    pub(super) fn http_client(&self) -> Client {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Client::new()
        }
    }

    /// The HRMS endpoints themselves are unauthenticated, but the bearer
    /// token rides along whenever a session holds one.
    pub(super) fn bearer_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = crate::state::session::stored_token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    /// Single choke point for dispatch: applies the timeout budget and
    /// classifies transport failures.
    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            use futures::future::{select, Either};
            // The fetch-backed client has no builder timeout; race the
            // request against a deadline instead.
            let request = request.send();
            let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
            futures::pin_mut!(request);
            futures::pin_mut!(deadline);
            match select(request, deadline).await {
                Either::Left((response, _)) => response.map_err(ApiError::from),
                Either::Right(_) => Err(ApiError::Timeout),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            request.send().await.map_err(ApiError::from)
        }
    }

    pub(super) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::unexpected(format!("Failed to parse response: {}", e)))
    }

    /// Non-success responses carry a FastAPI-style `{"detail": ...}` body
    /// when the backend produced them deliberately.
    pub(super) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("detail")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            });
        let message =
            detail.unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        log::warn!("backend returned {}: {}", status, message);
        ApiError::unexpected(message)
    }
}
