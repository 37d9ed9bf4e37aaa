//! Authentication types for Grafana client configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (API key, basic auth).
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Applying credentials to HTTP requests (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// HTTP basic authentication.
    #[serde(rename = "basic")]
    Basic {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
    /// API key or service account token (bearer authentication).
    #[serde(rename = "token")]
    ApiToken {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_auth_strategy_serde_round_trip() {
        let token = SecretString::new("test-token".to_string().into());
        let original = AuthStrategy::ApiToken { token };

        let json = serde_json::to_string(&original).unwrap();
        let deserialized: AuthStrategy = serde_json::from_str(&json).unwrap();

        match deserialized {
            AuthStrategy::ApiToken { token } => assert_eq!(token.expose_secret(), "test-token"),
            other => panic!("expected ApiToken, got {other:?}"),
        }
    }

    #[test]
    fn test_auth_config_flattens_strategy_tag() {
        let config = AuthConfig {
            strategy: AuthStrategy::Basic {
                username: "admin".to_string(),
                password: SecretString::new("secret".to_string().into()),
            },
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "basic");
        assert_eq!(json["username"], "admin");
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let strategy = AuthStrategy::ApiToken {
            token: SecretString::new("super-secret-token".to_string().into()),
        };

        let debug = format!("{strategy:?}");
        assert!(!debug.contains("super-secret-token"));
    }
}
