//! Welcome section with the "Say Hello" button

use dioxus::prelude::*;

use crate::presentation::components::common::{Button, Card};
use crate::presentation::state::use_notice_state;

#[component]
pub fn WelcomeCard() -> Element {
    let mut notice = use_notice_state();

    rsx! {
        Card {
            title: "Welcome to My App",
            description: "Handling Forms in Rust",
            Button {
                label: "Say Hello",
                on_click: move |_| {
                    notice.show("Hello!");
                },
            }
        }
    }
}
