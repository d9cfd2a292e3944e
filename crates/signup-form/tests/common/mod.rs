//! Common test utilities for integration tests.

use recaptcha_client::RecaptchaClient;
use signup_form::banner::{BannerKind, MessageBanner};
use signup_form::flow::SignupFlow;
use std::sync::Arc;
use std::time::Duration;
use sundown_client::SundownClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Stand up a token provider mock that issues the given token.
pub async fn mock_token_provider(token: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/execute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": token
        })))
        .mount(&server)
        .await;

    server
}

/// Build a flow wired to the given mock servers.
pub fn test_flow(provider: &MockServer, api: &MockServer) -> SignupFlow {
    SignupFlow::new(
        Arc::new(RecaptchaClient::new(provider.uri(), "test-site-key").unwrap()),
        Arc::new(SundownClient::new(api.uri()).unwrap()),
        MessageBanner::new(BannerKind::Success, Duration::from_secs(5)),
        MessageBanner::new(BannerKind::Error, Duration::from_secs(3)),
        "US",
    )
}
