use itinerary_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconcilerError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot merge {lhs} with {rhs}")]
    TypeMismatch { lhs: &'static str, rhs: &'static str },

    #[error("Invalid boarding pass: {0}")]
    InvalidBoardingPass(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, ReconcilerError>;
