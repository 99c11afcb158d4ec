//! Acknowledgment toast
//!
//! Shows the current notice in the bottom-right corner. Auto-dismisses after
//! the configured delay or on click.

use dioxus::prelude::*;

use crate::presentation::services::use_client_config;
use crate::presentation::state::use_notice_state;
use crate::use_platform;

#[component]
pub fn NoticeToast() -> Element {
    let platform = use_platform();
    let dismiss_ms = use_client_config().notice_dismiss_ms;
    let mut notice = use_notice_state();

    // Re-runs whenever a notice is shown
    use_effect(move || {
        let generation = *notice.generation.read();
        if notice.message.read().is_some() {
            let platform = platform.clone();
            spawn(async move {
                platform.sleep_ms(dismiss_ms).await;
                notice.dismiss_if_current(generation);
            });
        }
    });

    let message = notice.message.read().clone();

    rsx! {
        if let Some(text) = message {
            div {
                class: "fixed bottom-4 right-4 z-50",
                div {
                    class: "bg-blue-500 text-white rounded-lg shadow-md px-4 py-3 cursor-pointer",
                    role: "status",
                    onclick: move |_| notice.dismiss(),
                    "{text}"
                }
            }
        }
    }
}
