//! Token provider API types.

use serde::{Deserialize, Serialize};

/// Token request for a named user action.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteRequest {
    pub site_key: String,
    pub action: String,
}

/// One-time token issued by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteResponse {
    pub token: String,
}
