//! Bot-mitigation token provider client.

mod client;
mod error;
mod types;

pub use client::RecaptchaClient;
pub use error::RecaptchaError;
pub use types::*;
