//! Token provider HTTP client.

use crate::error::RecaptchaError;
use crate::types::*;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Client for the bot-mitigation token provider.
///
/// The site key identifies the protected site to the provider. It is served
/// to every visitor, so it is plain configuration rather than a secret.
#[derive(Clone)]
pub struct RecaptchaClient {
    client: Client,
    base_url: String,
    site_key: String,
}

impl RecaptchaClient {
    /// Create a new token provider client.
    pub fn new(
        base_url: impl Into<String>,
        site_key: impl Into<String>,
    ) -> Result<Self, RecaptchaError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            site_key: site_key.into(),
        })
    }

    /// Check that the provider is reachable.
    pub async fn ready(&self) -> bool {
        self.client
            .get(format!("{}/ready", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Obtain a one-time token for the given user action.
    #[instrument(skip(self))]
    pub async fn execute(&self, action: &str) -> Result<String, RecaptchaError> {
        let request = ExecuteRequest {
            site_key: self.site_key.clone(),
            action: action.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/execute", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            warn!("Token request failed: {} - {}", status, message);
            return Err(RecaptchaError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let body: ExecuteResponse = serde_json::from_str(&body)?;
        if body.token.is_empty() {
            return Err(RecaptchaError::EmptyToken);
        }

        debug!("Obtained token for action {}", action);
        Ok(body.token)
    }
}
