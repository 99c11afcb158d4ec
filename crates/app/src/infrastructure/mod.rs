//! Infrastructure adapters: HTTP and platform services.

pub mod http_client;
pub mod platform;
