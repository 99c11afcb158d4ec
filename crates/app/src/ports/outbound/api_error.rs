//! Errors surfaced by the HTTP boundary

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The configured endpoint could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    /// The body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
