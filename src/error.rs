//! Error types for the ESPN free-agent projection exporter

use thiserror::Error;


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl EspnError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        EspnError::InvalidConfig {
            message: message.into(),
        }
    }
}
