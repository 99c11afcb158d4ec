//! Port definitions for the client.

pub mod outbound;
