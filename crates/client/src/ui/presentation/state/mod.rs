//! Application state containers
//!
//! Each container wraps domain state in Dioxus signals and is provided as
//! context by the application root.

mod notice_state;
mod posts_state;
mod registration_state;

pub use notice_state::{use_notice_state, NoticeState};
pub use posts_state::{use_posts_loader, use_posts_state, PostsState};
pub use registration_state::{use_registration_state, RegistrationState};
