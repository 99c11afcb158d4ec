//! Regdesk client crate.
//!
//! Dioxus UI for the registration form and post feed. Services, ports and
//! adapters come from `regdesk-app`; platform selection (desktop or browser)
//! happens at compile time.

pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform};

/// Log filter used on desktop when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "regdesk_client=debug,regdesk_app=debug,dioxus=info";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filter_covers_both_crates() {
        let directives: Vec<&str> = DEFAULT_LOG_FILTER.split(',').collect();
        assert_eq!(
            directives,
            vec!["regdesk_client=debug", "regdesk_app=debug", "dioxus=info"]
        );
    }
}
