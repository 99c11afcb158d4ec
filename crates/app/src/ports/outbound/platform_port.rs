//! PlatformPort - Unified platform services interface
//!
//! Abstracts the bits of the host the UI needs so views stay free of
//! `#[cfg]` branches.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

use std::{future::Future, pin::Pin};

pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Logging operations
    // -------------------------------------------------------------------------

    /// Log an info message
    fn log_info(&self, msg: &str);

    /// Log an error message
    fn log_error(&self, msg: &str);

    /// Log a debug message
    fn log_debug(&self, msg: &str);

    /// Log a warning message
    fn log_warn(&self, msg: &str);
}
