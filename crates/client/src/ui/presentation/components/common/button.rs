//! Button primitive

use dioxus::prelude::*;
use std::fmt;

/// The `type` attribute of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    /// Submits the enclosing form
    Submit,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clickable control with a label.
///
/// `class` is appended to the base styling. A submit button inside a form
/// usually has no `on_click`.
#[component]
pub fn Button(
    #[props(into)] label: String,
    #[props(default)] button_type: ButtonType,
    #[props(default, into)] class: String,
    on_click: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        button {
            r#type: button_type.as_str(),
            class: "px-4 py-2 bg-blue-500 text-white rounded {class}",
            onclick: move |evt| {
                if let Some(handler) = on_click {
                    handler.call(evt);
                }
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_type_defaults_to_plain_button() {
        assert_eq!(ButtonType::default(), ButtonType::Button);
        assert_eq!(ButtonType::default().to_string(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
    }
}
