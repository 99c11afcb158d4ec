//! Common reusable UI components.
//!
//! Stateless primitives (button, text input, card) plus the notice toast.

mod button;
pub use button::{Button, ButtonType};

mod card;
pub use card::Card;

mod notice_toast;
pub use notice_toast::NoticeToast;

mod text_input;
pub use text_input::{InputChange, TextInput};
