//! Authentication strategies applied to outgoing requests.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
    /// API key or service account token, sent as a bearer token.
    ApiToken { token: SecretString },
}

impl AuthStrategy {
    /// Attach credentials to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
        }
    }

    /// Check if we're using token auth.
    pub fn is_api_token(&self) -> bool {
        matches!(self, Self::ApiToken { .. })
    }
}

impl From<&grafana_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &grafana_config::AuthStrategy) -> Self {
        match strategy {
            grafana_config::AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            grafana_config::AuthStrategy::ApiToken { token } => Self::ApiToken {
                token: token.clone(),
            },
        }
    }
}
