//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication configuration is missing or unusable.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Grafana answered with a status other than 200 OK.
    ///
    /// `message` is the status line (e.g. `404 Not Found`). `body` carries the
    /// raw response body for the legacy save endpoint only.
    #[error("API error ({status}) at {url}: {message}{}", .body.as_ref().map(|b| format!(", body: {b}")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        body: Option<String>,
    },

    /// The response body did not decode into the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// The request payload could not be encoded.
    #[error("Failed to encode request body: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of an [`ClientError::ApiError`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a 404 from Grafana.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || self.status() == Some(401)
    }
}
