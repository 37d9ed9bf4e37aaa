//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global connection options to their environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration (see `grafana_config::ConfigLoader`).

use clap::{Parser, Subcommand};

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "grafana-cli")]
#[command(about = "Grafana CLI - Manage Grafana dashboards from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-cli dashboards search --query cpu\n  grafana-cli dashboards get abc123 -o json\n  grafana-cli dashboards panel abc123 2\n  grafana-cli dashboards url abc123 --var host=web-01 --var host=web-02\n  grafana-cli -a $GRAFANA_API_KEY dashboards import board.json --folder-id 7 --overwrite\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., http://localhost:3000)
    #[arg(short, long, global = true, env = "GRAFANA_URL")]
    pub base_url: Option<String>,

    /// API key or service account token (preferred over username/password)
    #[arg(short, long, global = true, env = "GRAFANA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "GRAFANA_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "GRAFANA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GRAFANA_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "GRAFANA_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get, search, import and delete dashboards
    Dashboards {
        #[command(subcommand)]
        command: commands::dashboards::DashboardsCommand,
    },
}
