//! Centralized constants for the Grafana client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Grafana HTTP port.
pub const DEFAULT_GRAFANA_PORT: u16 = 3000;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL of the Grafana server.
pub const ENV_BASE_URL: &str = "GRAFANA_URL";

/// API key or service account token.
pub const ENV_API_KEY: &str = "GRAFANA_API_KEY";

/// Username for basic authentication.
pub const ENV_USERNAME: &str = "GRAFANA_USERNAME";

/// Password for basic authentication.
pub const ENV_PASSWORD: &str = "GRAFANA_PASSWORD";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "GRAFANA_TIMEOUT";

/// Skip TLS certificate verification.
pub const ENV_SKIP_VERIFY: &str = "GRAFANA_SKIP_VERIFY";

/// Any non-empty value enables logging of raw dashboard response bodies.
pub const ENV_LOG_RESPONSES: &str = "GF_LOG";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
