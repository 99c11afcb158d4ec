//! The four sections rendered by the application root

mod posts_card;
mod registration_card;
mod submitted_card;
mod welcome_card;

pub use posts_card::PostsCard;
pub use registration_card::RegistrationCard;
pub use submitted_card::SubmittedCard;
pub use welcome_card::WelcomeCard;
