//! Application layer: use cases built on the outbound ports.

pub mod services;
