//! HTTP adapter implementing `RawApiPort`.
//!
//! Uses reqwest on desktop and gloo-net (browser fetch) on WASM.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone, Default)]
pub struct ApiAdapter {
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::HttpStatus {
                status: response.status(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
