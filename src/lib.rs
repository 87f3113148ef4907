// Zodiac Horoscope Library
// Exposes the sign lookup and screen navigation for testing and reuse

pub mod assets;
pub mod config;
pub mod context;
pub mod dialogs;
pub mod error;
pub mod messages;
pub mod models;
pub mod navigator;
pub mod random;
pub mod ui;
pub mod ui_state;
pub mod utils;
pub mod zodiac;

// Re-export commonly used types
pub use assets::{Backdrop, FsImageLoader, ImageLoader};
pub use config::AppConfig;
pub use context::AppContext;
pub use dialogs::{ErrorReporter, NativeDialogs};
pub use error::{AppError, AppResult};
pub use messages::Message;
pub use models::*;
pub use navigator::{Navigator, Screen, ScreenKind, Transition};
pub use random::{IndexSource, ThreadRngSource};
pub use zodiac::{resolve, ZodiacRange, ZODIAC_RANGES};
