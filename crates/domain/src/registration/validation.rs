//! Field validation rules for the registration form
//!
//! The rules are intentionally shallow:
//! - Name must not be blank after trimming
//! - Email only needs to contain an `@`
//! - Age must be a finite number of at least 1

use std::collections::BTreeMap;
use thiserror::Error;

use super::field::{Field, FormData};

/// Message attached to a field that failed validation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Age must be a valid number")]
    InvalidAge,
}

/// Errors found by the last validation pass, keyed by field.
///
/// Valid fields are absent rather than marked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in field display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }
}

/// Validate every field of the form.
///
/// Pure over `data`: the same input always yields the same map.
pub fn validate_form(data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if data.name.trim().is_empty() {
        errors.insert(Field::Name, ValidationError::NameRequired);
    }
    if !data.email.contains('@') {
        errors.insert(Field::Email, ValidationError::InvalidEmail);
    }
    if !is_valid_age(&data.age) {
        errors.insert(Field::Age, ValidationError::InvalidAge);
    }

    errors
}

fn is_valid_age(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    match trimmed.parse::<f64>() {
        Ok(age) => age.is_finite() && age >= 1.0,
        Err(_) => false,
    }
}
