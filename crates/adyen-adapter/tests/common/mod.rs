/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for adyen-adapter tests

use adyen_adapter::{AdyenClient, ClientConfig, Credentials, Endpoints, Environment};
use wiremock::MockServer;

/// Hex HMAC key in the format shown by the skin editor
#[allow(dead_code)]
pub const TEST_HMAC_KEY: &str = "4468D9782DEF54FCD706C9100C71EC43932B1EBC2ACF6BA0560C05AAA7550C48";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Test-environment client with `u`/`p` basic auth, pointed at the mock
pub fn mock_client(server: &MockServer, credentials: Credentials) -> AdyenClient {
    AdyenClient::with_config_and_endpoints(
        credentials,
        ClientConfig {
            merchant_account: Some("TestMerchant".to_string()),
            skin_code: Some("X7hsNDWp".to_string()),
            client_id: Some("1234567890".to_string()),
            ..ClientConfig::default()
        },
        Endpoints::with_host(&server.uri()),
    )
    .expect("client init")
}

pub fn basic_credentials() -> Credentials {
    Credentials::basic(Environment::Test, "u", "p")
}

/// Unique merchant reference per test run
#[allow(dead_code)]
pub fn merchant_reference() -> String {
    format!("test-{}", uuid::Uuid::new_v4())
}
