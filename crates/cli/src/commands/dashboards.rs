//! Dashboards command implementation.
//!
//! Responsibilities:
//! - Get dashboards by uid or slug, and look up single panels
//! - Search, import, save and delete dashboards
//! - Build frontend links with templating variables
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Output formatting details (see formatters module)
//!
//! Invariants:
//! - Every subcommand issues at most one API request
//! - A missing panel is reported as an error, never as empty output

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use grafana_client::{Dashboard, DashboardModel, GrafanaClient};
use grafana_config::Config;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::CliError;
use crate::formatters::{DeletedOutput, OutputFormat, UrlOutput, get_formatter, output_result};

#[derive(Subcommand)]
pub enum DashboardsCommand {
    /// Show a dashboard by uid
    Get {
        /// Dashboard uid
        uid: String,
    },
    /// Show a dashboard by slug (legacy endpoint)
    GetBySlug {
        /// Dashboard URL slug
        slug: String,
    },
    /// Search dashboards by title
    Search {
        /// Title search query (empty matches all dashboards)
        #[arg(short, long, default_value = "")]
        query: String,
        /// Only return dashboards in this folder
        #[arg(long)]
        folder_id: Option<i64>,
    },
    /// Import a dashboard model from a JSON file
    Import {
        /// File holding the dashboard model JSON
        file: PathBuf,
        /// Folder to import into (0 is the General folder)
        #[arg(long, default_value_t = 0)]
        folder_id: i64,
        /// Replace an existing dashboard with the same uid
        #[arg(long)]
        overwrite: bool,
    },
    /// Save a raw dashboard model from a JSON file (legacy endpoint)
    Save {
        /// File holding the dashboard model JSON object
        file: PathBuf,
        /// Replace an existing dashboard with the same uid
        #[arg(long)]
        overwrite: bool,
    },
    /// Delete a dashboard by uid
    Delete {
        /// Dashboard uid
        uid: String,
    },
    /// Show one panel of a dashboard
    Panel {
        /// Dashboard uid
        uid: String,
        /// Panel ID within the dashboard
        #[arg(allow_negative_numbers = true)]
        panel_id: i64,
    },
    /// Print the frontend URL of a dashboard with templating variables set
    Url {
        /// Dashboard uid
        uid: String,
        /// Variable assignment, repeatable (e.g., --var host=web-01)
        #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },
}

/// Parse a `name=value` variable assignment. The value may contain `=`.
fn parse_var(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

/// Group repeated assignments by name, keeping value order.
fn group_vars(vars: Vec<(String, String)>) -> HashMap<String, Vec<String>> {
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in vars {
        grouped.entry(name).or_default().push(value);
    }
    grouped
}

pub async fn run(config: Config, command: DashboardsCommand, format: OutputFormat) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    match command {
        DashboardsCommand::Get { uid } => run_get(&client, &uid, format).await,
        DashboardsCommand::GetBySlug { slug } => run_get_by_slug(&client, &slug, format).await,
        DashboardsCommand::Search { query, folder_id } => {
            run_search(&client, &query, folder_id, format).await
        }
        DashboardsCommand::Import {
            file,
            folder_id,
            overwrite,
        } => run_import(&client, &file, folder_id, overwrite, format).await,
        DashboardsCommand::Save { file, overwrite } => {
            run_save(&client, &file, overwrite, format).await
        }
        DashboardsCommand::Delete { uid } => run_delete(&client, &uid, format).await,
        DashboardsCommand::Panel { uid, panel_id } => {
            run_panel(&client, &uid, panel_id, format).await
        }
        DashboardsCommand::Url { uid, vars } => run_url(&client, &uid, vars, format).await,
    }
}

async fn run_get(client: &GrafanaClient, uid: &str, format: OutputFormat) -> Result<()> {
    info!("Getting dashboard: {}", uid);

    let dashboard = client.get_dashboard(uid).await?;

    let output = get_formatter(format).format_dashboard(&dashboard)?;
    output_result(&output)
}

#[allow(deprecated)]
async fn run_get_by_slug(client: &GrafanaClient, slug: &str, format: OutputFormat) -> Result<()> {
    info!("Getting dashboard by slug: {}", slug);

    let dashboard = client.get_dashboard_by_slug(slug).await?;

    let output = get_formatter(format).format_dashboard(&dashboard)?;
    output_result(&output)
}

async fn run_search(
    client: &GrafanaClient,
    query: &str,
    folder_id: Option<i64>,
    format: OutputFormat,
) -> Result<()> {
    info!("Searching dashboards (query: '{}', folder: {:?})", query, folder_id);

    let hits = client.search_dashboards(query, folder_id).await?;

    let output = get_formatter(format).format_search_hits(&hits)?;
    output_result(&output)
}

fn read_dashboard_file(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dashboard file {}", path.display()))?;
    let value = serde_json::from_str(&content).map_err(|e| CliError::InvalidInput {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(value)
}

async fn run_import(
    client: &GrafanaClient,
    file: &Path,
    folder_id: i64,
    overwrite: bool,
    format: OutputFormat,
) -> Result<()> {
    info!("Importing dashboard from {} into folder {}", file.display(), folder_id);

    let model: DashboardModel =
        serde_json::from_value(read_dashboard_file(file)?).map_err(|e| CliError::InvalidInput {
            path: file.display().to_string(),
            reason: e.to_string(),
        })?;
    let dashboard = Dashboard::new(model, folder_id, overwrite);

    let response = client.create_dashboard(&dashboard).await?;

    let output = get_formatter(format).format_save_response(&response)?;
    output_result(&output)
}

#[allow(deprecated)]
async fn run_save(
    client: &GrafanaClient,
    file: &Path,
    overwrite: bool,
    format: OutputFormat,
) -> Result<()> {
    info!("Saving dashboard from {}", file.display());

    let model: Map<String, Value> = match read_dashboard_file(file)? {
        Value::Object(map) => map,
        _ => {
            return Err(CliError::InvalidInput {
                path: file.display().to_string(),
                reason: "expected a JSON object".to_string(),
            }
            .into());
        }
    };

    let response = client.save_dashboard(&model, overwrite).await?;

    let output = get_formatter(format).format_save_response(&response)?;
    output_result(&output)
}

async fn run_delete(client: &GrafanaClient, uid: &str, format: OutputFormat) -> Result<()> {
    info!("Deleting dashboard: {}", uid);

    let title = client.delete_dashboard(uid).await?;

    let deleted = DeletedOutput {
        uid: uid.to_string(),
        title,
    };
    let output = get_formatter(format).format_deleted(&deleted)?;
    output_result(&output)
}

async fn run_panel(
    client: &GrafanaClient,
    uid: &str,
    panel_id: i64,
    format: OutputFormat,
) -> Result<()> {
    info!("Getting panel {} of dashboard {}", panel_id, uid);

    let dashboard = client.get_dashboard(uid).await?;
    let panel = dashboard
        .get_panel(panel_id)
        .ok_or_else(|| CliError::PanelNotFound {
            uid: uid.to_string(),
            panel_id,
        })?;

    let output = get_formatter(format).format_panel(panel)?;
    output_result(&output)
}

async fn run_url(
    client: &GrafanaClient,
    uid: &str,
    vars: Vec<(String, String)>,
    format: OutputFormat,
) -> Result<()> {
    info!("Building frontend URL for dashboard: {}", uid);

    let dashboard = client.get_dashboard(uid).await?;
    let path = dashboard.frontend_url(&group_vars(vars));

    let url = UrlOutput {
        url: format!("{}{}", client.base_url(), path),
    };
    let output = get_formatter(format).format_url(&url)?;
    output_result(&output)
}
