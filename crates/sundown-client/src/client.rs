//! Sundown API HTTP client.

use crate::error::SundownError;
use crate::types::CreateRequest;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Client for the Sundown signup API.
#[derive(Clone)]
pub struct SundownClient {
    client: Client,
    base_url: String,
}

impl SundownClient {
    /// Create a new Sundown client.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SundownError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Register a phone number for sunset alerts.
    ///
    /// Any 2xx response counts as success and the body is not inspected.
    /// Everything else is a failure, with the body captured for the log.
    #[instrument(skip(self, phone, token))]
    pub async fn create(&self, phone: &str, token: &str) -> Result<(), SundownError> {
        let request = CreateRequest {
            phone: phone.to_string(),
            recaptcha_token: token.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/create", self.base_url))
            .form(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Create failed: {} - {}", status, message);
            return Err(SundownError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Signup accepted");
        Ok(())
    }
}
