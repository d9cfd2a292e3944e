//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Token provider error: {0}")]
    Recaptcha(#[from] recaptcha_client::RecaptchaError),

    #[error("Sundown API error: {0}")]
    Api(#[from] sundown_client::SundownError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
