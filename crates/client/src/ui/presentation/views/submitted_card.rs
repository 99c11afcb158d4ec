//! Read-only view of the last accepted submission

use dioxus::prelude::*;

use crate::presentation::components::common::Card;
use crate::presentation::state::use_registration_state;

/// Renders nothing until the first successful submission.
#[component]
pub fn SubmittedCard() -> Element {
    let registration = use_registration_state();
    let submitted = registration.form.read().submitted().cloned();

    rsx! {
        if let Some(data) = submitted {
            Card {
                title: "Submitted Data",
                description: "Here is what you entered:",
                p { strong { "Name: " } "{data.name}" }
                p { strong { "Email: " } "{data.email}" }
                p { strong { "Age: " } "{data.age}" }
            }
        }
    }
}
