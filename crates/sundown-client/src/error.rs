//! Sundown API client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SundownError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}
