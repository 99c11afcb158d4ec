//! WASM platform implementation
//!
//! Logging goes through `tracing`, which `tracing-wasm` forwards to the
//! browser console; sleeping uses gloo timers.

use std::{future::Future, pin::Pin};

use gloo_timers::future::TimeoutFuture;

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct WasmPlatform;

impl PlatformPort for WasmPlatform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(ms))
    }

    fn log_info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn log_error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn log_debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn log_warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// Create the platform services for the browser
pub fn create_platform() -> WasmPlatform {
    WasmPlatform
}
