//! Regdesk application crate.
//!
//! Everything the client needs below the UI: configuration, outbound ports,
//! application services, and the platform-selected infrastructure adapters.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

pub use config::ClientConfig;
