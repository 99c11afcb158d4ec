//! Labeled, controlled text input

use dioxus::prelude::*;

/// Change notification from a `TextInput`: the input's name and its new raw value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputChange {
    pub name: String,
    pub value: String,
}

/// Single-line text field whose displayed value is always `value`.
///
/// Every keystroke is reported through `on_change` untouched; the owner
/// decides what to store.
#[component]
pub fn TextInput(
    #[props(into)] label: String,
    #[props(into)] name: String,
    #[props(into)] value: String,
    #[props(default, into)] placeholder: String,
    on_change: EventHandler<InputChange>,
) -> Element {
    let input_name = name.clone();

    rsx! {
        div {
            class: "flex flex-col gap-2",
            label { class: "font-semibold", r#for: "{name}", "{label}" }
            input {
                id: "{name}",
                r#type: "text",
                name: "{name}",
                value: "{value}",
                placeholder: "{placeholder}",
                class: "border p-2 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                oninput: move |evt: FormEvent| {
                    on_change.call(InputChange {
                        name: input_name.clone(),
                        value: evt.value(),
                    });
                },
            }
        }
    }
}
