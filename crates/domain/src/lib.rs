//! Regdesk domain layer.
//!
//! Pure types and rules for the registration form and the post feed. Nothing
//! in here knows about Dioxus, HTTP, or the platform the client runs on.

pub mod error;
pub mod post;
pub mod registration;

pub use error::DomainError;
pub use post::{Post, PostFeed};
pub use registration::{
    validate_form, Field, FieldErrors, FormData, RegistrationForm, SubmitOutcome, ValidationError,
};
