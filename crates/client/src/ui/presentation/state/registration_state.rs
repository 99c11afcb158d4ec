//! Registration state management
//!
//! Holds the registration form aggregate. All edits and submits go through
//! here so the form values, error map and submitted snapshot stay consistent.

use dioxus::prelude::*;
use regdesk_domain::{DomainError, Field, RegistrationForm, SubmitOutcome};

#[derive(Clone, Copy)]
pub struct RegistrationState {
    pub form: Signal<RegistrationForm>,
}

impl RegistrationState {
    /// Create a new RegistrationState with a blank form
    pub fn new() -> Self {
        Self {
            form: Signal::new(RegistrationForm::new()),
        }
    }

    /// Wrap a form that already holds values
    pub fn from_form(form: RegistrationForm) -> Self {
        Self {
            form: Signal::new(form),
        }
    }

    /// Apply a change event from an input keyed by its name
    pub fn apply_change(&mut self, name: &str, value: String) -> Result<Field, DomainError> {
        self.form.write().apply_change(name, value)
    }

    /// Validate and submit the current values
    pub fn submit(&mut self) -> SubmitOutcome {
        self.form.write().handle_submit()
    }
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the RegistrationState from context
pub fn use_registration_state() -> RegistrationState {
    use_context::<RegistrationState>()
}
