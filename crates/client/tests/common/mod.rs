//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Grafana client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export test utilities from grafana-client
#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use grafana_client::{AuthStrategy, GrafanaClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// Token auth used by endpoint-level tests.
#[allow(dead_code)]
pub fn token_auth() -> AuthStrategy {
    AuthStrategy::ApiToken {
        token: SecretString::new("test-token".to_string().into()),
    }
}

/// Build a client pointed at a mock server with token auth.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .auth_strategy(token_auth())
        .build()
        .expect("client should build")
}
