//! Desktop platform implementation
//!
//! Logging goes through `tracing`; sleeping uses the tokio runtime dioxus-desktop
//! runs on.

use std::{future::Future, pin::Pin, time::Duration};

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct DesktopPlatform;

impl PlatformPort for DesktopPlatform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(tokio::time::sleep(Duration::from_millis(ms)))
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

/// Create the platform services for desktop
pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform
}
