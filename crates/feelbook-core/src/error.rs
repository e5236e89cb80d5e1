use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("could not parse input as a day: {0}")]
    InvalidDay(String),
    #[error("start time is not HH:MM: {0}")]
    MalformedStartTime(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookingError {
    pub fn config<T: Into<String>>(message: T) -> Self {
        BookingError::Config(message.into())
    }
}
