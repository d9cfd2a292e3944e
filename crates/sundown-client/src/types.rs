//! Sundown API types.

use serde::Serialize;

/// Signup submission, form-encoded onto the create endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRequest {
    pub phone: String,
    pub recaptcha_token: String,
}
