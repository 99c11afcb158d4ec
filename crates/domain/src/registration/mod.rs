//! Registration form: fields, validation, and the submit workflow

mod field;
mod form;
mod validation;

pub use field::{Field, FormData};
pub use form::{RegistrationForm, SubmitOutcome};
pub use validation::{validate_form, FieldErrors, ValidationError};
