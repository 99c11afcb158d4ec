use regdesk_app::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

use presentation::components::common::NoticeToast;
use presentation::state::{use_posts_loader, NoticeState, PostsState, RegistrationState};
use presentation::views::{PostsCard, RegistrationCard, SubmittedCard, WelcomeCard};

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Mountable root of the application. Takes no props.
pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // These must be created inside an active Dioxus runtime.
    use_context_provider(RegistrationState::new);
    use_context_provider(PostsState::new);
    use_context_provider(NoticeState::new);

    use_posts_loader();

    rsx! {
        document::Title { "Regdesk" }
        document::Stylesheet {
            href: asset!("/assets/css/output.css"),
        }

        div {
            class: "p-6 flex flex-col items-center gap-6 bg-gray-100 min-h-screen",
            WelcomeCard {}
            RegistrationCard {}
            SubmittedCard {}
            PostsCard {}
        }

        NoticeToast {}
    }
}
