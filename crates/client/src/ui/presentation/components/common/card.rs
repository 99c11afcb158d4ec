//! Card primitive - titled container with a description line

use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(into)] title: String,
    #[props(into)] description: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "border rounded-lg p-4 shadow-md bg-white w-80",
            h2 { class: "text-lg font-semibold", "{title}" }
            p { class: "text-gray-600", "{description}" }
            div { class: "mt-4", {children} }
        }
    }
}
