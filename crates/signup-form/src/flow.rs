//! The submission flow: live formatting, validation, token, POST, banners.

use crate::banner::MessageBanner;
use crate::field::{InputField, RegionSelector};
use phone_input::{mask, parse, region_from_code, LiveFormatter, PhoneError};
use recaptcha_client::RecaptchaClient;
use std::sync::Arc;
use sundown_client::SundownClient;
use tracing::{error, info, warn};

/// Action name reported to the token provider.
const SUBMIT_ACTION: &str = "submit";

pub const MSG_SUCCESS: &str = "Success. You will receive a text message with next steps.";
pub const MSG_REQUEST_FAILED: &str = "Request failed. Please try again.";
pub const MSG_INVALID_NUMBER: &str = "Invalid phone number.";
pub const MSG_ENTER_COUNTRY_CODE: &str = "Enter country code";

/// Drives the signup form: reformats the field as it changes and runs the
/// submit sequence parse -> token -> POST -> banner.
#[derive(Clone)]
pub struct SignupFlow {
    recaptcha: Arc<RecaptchaClient>,
    api: Arc<SundownClient>,
    pub field: InputField,
    pub region: RegionSelector,
    pub success: MessageBanner,
    pub error: MessageBanner,
    default_region: String,
}

impl SignupFlow {
    pub fn new(
        recaptcha: Arc<RecaptchaClient>,
        api: Arc<SundownClient>,
        success: MessageBanner,
        error: MessageBanner,
        default_region: impl Into<String>,
    ) -> Self {
        Self {
            recaptcha,
            api,
            field: InputField::new(),
            region: RegionSelector::default(),
            success,
            error,
            default_region: default_region.into(),
        }
    }

    /// Field-change handler: recompute the formatted value from the full
    /// current text and write it back. Formatting is scoped to the default
    /// region only while the selector matches it.
    pub async fn handle_input(&self, text: &str) -> String {
        let selected = self.region.code().await;
        let scope = if selected == self.default_region {
            region_from_code(&self.default_region)
        } else {
            None
        };

        let formatted = LiveFormatter::new(scope).input(text);
        self.field.replace(formatted.clone()).await;
        formatted
    }

    /// Submit-activation handler.
    ///
    /// Every outcome ends in a banner update; nothing propagates to the
    /// caller. A second activation while one is in flight runs the whole
    /// sequence again independently.
    pub async fn submit(&self) {
        let raw = self.field.value().await;
        let selected = self.region.code().await;

        let parsed = match parse(&raw, region_from_code(&selected)) {
            Ok(parsed) => parsed,
            Err(PhoneError::UnknownRegion) => {
                self.error.show(MSG_ENTER_COUNTRY_CODE).await;
                return;
            }
            Err(err) => {
                warn!("Rejected input: {}", err);
                self.error.show(err.to_string()).await;
                return;
            }
        };

        if !parsed.is_valid() {
            self.error.show(MSG_INVALID_NUMBER).await;
            return;
        }

        let phone = parsed.e164();
        info!("Submitting signup for {}", mask(&phone));

        let token = match self.recaptcha.execute(SUBMIT_ACTION).await {
            Ok(token) => token,
            Err(err) => {
                warn!("Token acquisition failed: {}", err);
                self.error.show(err.to_string()).await;
                return;
            }
        };

        match self.api.create(&phone, &token).await {
            Ok(()) => {
                self.success.show(MSG_SUCCESS).await;
                self.field.clear().await;
            }
            Err(err) => {
                error!("Signup request failed: {}", err);
                self.error.show(MSG_REQUEST_FAILED).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::BannerKind;
    use std::time::Duration;

    fn test_flow() -> SignupFlow {
        // Ports that nothing listens on; these tests stop before any
        // network call.
        SignupFlow::new(
            Arc::new(RecaptchaClient::new("http://127.0.0.1:9", "test-key").unwrap()),
            Arc::new(SundownClient::new("http://127.0.0.1:9").unwrap()),
            MessageBanner::new(BannerKind::Success, Duration::from_secs(5)),
            MessageBanner::new(BannerKind::Error, Duration::from_secs(3)),
            "US",
        )
    }

    #[tokio::test]
    async fn input_is_reformatted_when_selector_matches_default_region() {
        let flow = test_flow();
        flow.region.select("US").await;

        let formatted = flow.handle_input("2015550123").await;
        assert_ne!(formatted, "2015550123");
        assert_eq!(flow.field.value().await, formatted);
    }

    #[tokio::test]
    async fn input_is_unscoped_for_other_regions() {
        let flow = test_flow();
        flow.region.select("GB").await;

        let formatted = flow.handle_input("2015550123").await;
        assert_eq!(formatted, "2015550123");
    }

    #[tokio::test]
    async fn submit_without_region_asks_for_country_code() {
        let flow = test_flow();
        flow.region.select("").await;
        flow.field.replace("2015550123").await;

        flow.submit().await;

        assert_eq!(
            flow.error.message().await.as_deref(),
            Some(MSG_ENTER_COUNTRY_CODE)
        );
        assert!(!flow.success.is_visible().await);
    }

    #[tokio::test]
    async fn submit_rejects_unassignable_number() {
        let flow = test_flow();
        flow.region.select("US").await;
        flow.field.replace("5551234567").await;

        flow.submit().await;

        assert_eq!(
            flow.error.message().await.as_deref(),
            Some(MSG_INVALID_NUMBER)
        );
    }

    #[tokio::test]
    async fn submit_shows_parser_message_for_garbage() {
        let flow = test_flow();
        flow.region.select("US").await;
        flow.field.replace("not a number").await;

        flow.submit().await;

        let message = flow.error.message().await.unwrap();
        assert_ne!(message, MSG_INVALID_NUMBER);
        assert_ne!(message, MSG_ENTER_COUNTRY_CODE);
    }
}
