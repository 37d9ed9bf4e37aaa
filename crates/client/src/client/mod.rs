//! Main Grafana API client and API methods.
//!
//! This module provides the primary [`GrafanaClient`] for interacting with the
//! Grafana HTTP API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboards`: Dashboard retrieval, import, search and deletion
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - Every API method issues exactly one HTTP request and never retries
//! - The client holds no mutable state; it can be shared freely between tasks

pub mod builder;

mod dashboards;

use crate::auth::AuthStrategy;

/// Grafana HTTP API client.
///
/// # Creating a Client
///
/// Use [`GrafanaClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use grafana_client::{GrafanaClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("http://localhost:3000".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("glsa_...".to_string().into()),
///     })
///     .build()?;
///
/// let dashboard = client.get_dashboard("cpu-usage").await?;
/// ```
#[derive(Debug, Clone)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) log_responses: bool,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client authenticates with an API token.
    pub fn is_api_token_auth(&self) -> bool {
        self.auth.is_api_token()
    }

    /// Whether raw dashboard response bodies are logged.
    pub fn logs_responses(&self) -> bool {
        self.log_responses
    }
}
