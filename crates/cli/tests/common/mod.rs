//! Shared test utilities for grafana-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (tokens, base URLs).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `GRAFANA_API_KEY` is set to "test-token" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `grafana-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GRAFANA_API_KEY` is set to a dummy value to satisfy config validation.
/// - Other connection env vars are cleared to ensure no leakage from the host.
pub fn grafana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("GRAFANA_API_KEY", "test-token");

    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_USERNAME")
        .env_remove("GRAFANA_PASSWORD")
        .env_remove("GRAFANA_TIMEOUT")
        .env_remove("GRAFANA_SKIP_VERIFY")
        .env_remove("GF_LOG")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `grafana-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn grafana_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = grafana_cmd();
    cmd.env("GRAFANA_URL", base_url);
    cmd
}
