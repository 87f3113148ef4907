use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Missing resource: {0}")]
    MissingResource(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn invalid_date<S: Into<String>>(msg: S) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub fn missing_resource<S: Into<String>>(name: S) -> Self {
        Self::MissingResource(name.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Title of the modal shown to the user for this error.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::MissingResource(_) => "Missing Image",
            Self::InvalidDate(_) | Self::Image(_) | Self::Config(_) => "Error",
        }
    }

    /// Body of the modal shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidDate(_) => "Invalid date.".to_string(),
            Self::MissingResource(name) => format!("{} not found.", name),
            Self::Image(e) => format!("Could not load image: {}", e),
            Self::Config(msg) => msg.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
