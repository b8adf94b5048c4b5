/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for nobitex-adapter tests

use nobitex_adapter::{ClientConfig, Credentials, NobitexClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials used by every mock login exchange
pub fn test_credentials() -> Credentials {
    Credentials::new("john", "secret").remember(false)
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> NobitexClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    NobitexClient::with_config(config, test_credentials()).expect("client init")
}
