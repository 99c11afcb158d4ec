//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters implement this over the platform HTTP stack. It deals in
//! `serde_json::Value` so it can live behind `Arc<dyn RawApiPort>`; typed
//! decoding happens in the application services.
//!
//! Browser futures are not `Send`, so the WASM build declares the trait with
//! `?Send`.

use serde_json::Value;

use super::ApiError;

#[cfg(not(target_arch = "wasm32"))]
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// GET an absolute URL and decode the body as JSON.
    ///
    /// Non-success statuses map to `ApiError::HttpStatus`.
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
pub trait RawApiPort: Send + Sync {
    /// GET an absolute URL and decode the body as JSON.
    ///
    /// Non-success statuses map to `ApiError::HttpStatus`.
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;
}
