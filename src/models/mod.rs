// Declare modules
pub mod birthday;
pub mod month;
pub mod sign;
pub mod tarot;

// Flatten so callers can write `crate::models::Sign`.
pub use birthday::{days_in_month, Birthday};
pub use month::Month;
pub use sign::Sign;
pub use tarot::{TarotCard, TAROT_CARD_COUNT};
