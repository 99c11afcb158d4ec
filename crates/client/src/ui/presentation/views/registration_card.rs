//! Registration form section
//!
//! Inputs are controlled by `RegistrationState`; each field's error, if any,
//! renders right below it.

use dioxus::prelude::*;
use regdesk_domain::{Field, SubmitOutcome};

use crate::presentation::components::common::{Button, ButtonType, Card, InputChange, TextInput};
use crate::presentation::state::use_registration_state;
use crate::use_platform;

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Age => "Age",
    }
}

fn field_placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Enter your name...",
        Field::Email => "Enter your email...",
        Field::Age => "Enter your age...",
    }
}

#[component]
pub fn RegistrationCard() -> Element {
    let platform = use_platform();
    let mut registration = use_registration_state();

    let on_change = {
        let platform = platform.clone();
        use_callback(move |change: InputChange| {
            if let Err(e) = registration.apply_change(&change.name, change.value) {
                platform.log_warn(&format!("Ignoring change event: {}", e));
            }
        })
    };

    let form = registration.form.read().clone();
    let values = form.data();
    let errors = form.errors();

    rsx! {
        Card {
            title: "User Registration",
            description: "Fill in the details below:",
            form {
                class: "flex flex-col gap-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    match registration.submit() {
                        SubmitOutcome::Accepted => platform.log_info("Registration submitted"),
                        SubmitOutcome::Rejected { error_count } => platform.log_debug(
                            &format!("Registration rejected with {} field errors", error_count),
                        ),
                    }
                },

                for field in Field::ALL {
                    div {
                        key: "{field}",
                        class: "flex flex-col gap-1",
                        TextInput {
                            label: field_label(field),
                            name: field.as_str(),
                            value: values.get(field),
                            placeholder: field_placeholder(field),
                            on_change: on_change,
                        }
                        if let Some(error) = errors.get(field) {
                            p { class: "text-red-500", "{error}" }
                        }
                    }
                }

                Button {
                    label: "Submit",
                    button_type: ButtonType::Submit,
                }
            }
        }
    }
}
