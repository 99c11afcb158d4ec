//! Unified error type for the domain layer

use thiserror::Error;

/// Errors raised by domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A change event named a field the registration form does not have
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

impl DomainError {
    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}
