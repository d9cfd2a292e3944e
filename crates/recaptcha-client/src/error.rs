//! Token provider errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecaptchaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("Provider returned an empty token")]
    EmptyToken,
}
