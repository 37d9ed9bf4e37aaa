//! Command dispatch.
//!
//! Routes the parsed top-level command to its implementation with the
//! resolved configuration and output format.

use anyhow::Result;
use grafana_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

pub async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Dashboards { command } => {
            commands::dashboards::run(config, command, cli.output).await
        }
    }
}
