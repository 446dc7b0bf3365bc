/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for mindmeister-client tests

#![allow(dead_code)]

use mindmeister_client::{ClientConfig, Credentials, MindMeisterClient};
use wiremock::MockServer;

pub const API_KEY: &str = "1625a1388f512a203faa43e8685bcdde";
pub const SECRET_KEY: &str = "2d845879a2f2a3b1";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials shared by the signing fixtures
pub fn test_credentials() -> Credentials {
    Credentials::new(API_KEY, SECRET_KEY)
}

/// Client pointed at the mock server, without auth token
pub fn client_for(server: &MockServer) -> MindMeisterClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    MindMeisterClient::with_config(test_credentials(), config).expect("client init")
}

/// Mock auth token for testing
pub fn mock_auth_token() -> String {
    "a1b2c3d4e5f60718".to_string()
}
