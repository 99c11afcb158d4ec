//! Registration form aggregate
//!
//! Owns the editable values, the errors from the last submit attempt, and the
//! snapshot of the last accepted submission.

use super::field::{Field, FormData};
use super::validation::{validate_form, FieldErrors};
use crate::error::DomainError;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were copied into the snapshot and the form was reset
    Accepted,
    /// Validation failed with this many field errors; nothing else changed
    Rejected { error_count: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    data: FormData,
    errors: FieldErrors,
    submitted: Option<FormData>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Snapshot of the most recent accepted submission, if any
    pub fn submitted(&self) -> Option<&FormData> {
        self.submitted.as_ref()
    }

    /// Overwrite one field. No validation happens until submit.
    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Route a change event keyed by the input's name.
    ///
    /// Unknown names are rejected and leave the form untouched.
    pub fn apply_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<Field, DomainError> {
        let field = name.parse::<Field>()?;
        self.handle_change(field, value);
        Ok(field)
    }

    /// Recompute the error map from the current values.
    ///
    /// Returns true when no field failed.
    pub fn validate_form(&mut self) -> bool {
        self.errors = validate_form(&self.data);
        self.errors.is_empty()
    }

    /// Validate and, if the values pass, snapshot them and reset the form.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        if !self.validate_form() {
            return SubmitOutcome::Rejected {
                error_count: self.errors.len(),
            };
        }

        self.submitted = Some(std::mem::take(&mut self.data));
        SubmitOutcome::Accepted
    }
}
