//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table output for dashboard resources.
//! - Implement the `Formatter` trait for each supported format.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Table | Human message | `No dashboards found.` |
//!
//! ## Missing/Null Value Handling
//!
//! JSON keeps `null`; tables render null as an empty cell.

use anyhow::Result;
use clap::ValueEnum;
use grafana_client::{Dashboard, DashboardPanel, DashboardSaveResponse, DashboardSearchHit};
use serde::Serialize;

mod common;
mod json;
mod table;

pub use common::output_result;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Result of a dashboard deletion.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedOutput {
    pub uid: String,
    pub title: String,
}

/// A frontend link to a dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct UrlOutput {
    pub url: String,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a full dashboard.
    fn format_dashboard(&self, dashboard: &Dashboard) -> Result<String>;

    /// Format dashboard search results.
    fn format_search_hits(&self, hits: &[DashboardSearchHit]) -> Result<String>;

    /// Format an import or save result.
    fn format_save_response(&self, response: &DashboardSaveResponse) -> Result<String>;

    /// Format a single panel.
    fn format_panel(&self, panel: &DashboardPanel) -> Result<String>;

    /// Format a deletion result.
    fn format_deleted(&self, deleted: &DeletedOutput) -> Result<String>;

    /// Format a frontend link.
    fn format_url(&self, url: &UrlOutput) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
