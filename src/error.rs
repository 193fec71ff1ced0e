//! Error types for the portfolio page

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("carousel needs at least one project")]
    EmptyCarousel,

    #[error("index {index} out of range for {len} projects")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("image error: {path:?} - {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("preference error: {0}")]
    Preference(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn image(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Image {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
