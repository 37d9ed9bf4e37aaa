//! Grafana CLI - Command-line interface for the Grafana dashboard API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute Grafana HTTP API commands via the shared client library.
//! - Format and display results as tables or JSON.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout stays machine-readable.
//! - Tracing is initialised after config so `GF_LOG` can raise the client's level.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use grafana_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let filter = match log_filter(config.connection.log_responses) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Invalid log filter: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// `RUST_LOG` filter, raised to `debug` for the client when `GF_LOG` is set
/// so raw dashboard bodies reach stderr.
fn log_filter(log_responses: bool) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::from_default_env();
    if log_responses {
        return Ok(filter.add_directive("grafana_client=debug".parse()?));
    }
    Ok(filter)
}

/// Environment first, then CLI overrides (highest priority).
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref key) = cli.api_key {
        loader = loader.with_api_token(key.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}
