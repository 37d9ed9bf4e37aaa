//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON, using the API's own
//!   field names.

use anyhow::Result;
use grafana_client::{Dashboard, DashboardPanel, DashboardSaveResponse, DashboardSearchHit};

use crate::formatters::{DeletedOutput, Formatter, UrlOutput};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_dashboard(&self, dashboard: &Dashboard) -> Result<String> {
        Ok(serde_json::to_string_pretty(dashboard)?)
    }

    fn format_search_hits(&self, hits: &[DashboardSearchHit]) -> Result<String> {
        Ok(serde_json::to_string_pretty(hits)?)
    }

    fn format_save_response(&self, response: &DashboardSaveResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }

    fn format_panel(&self, panel: &DashboardPanel) -> Result<String> {
        Ok(serde_json::to_string_pretty(panel)?)
    }

    fn format_deleted(&self, deleted: &DeletedOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(deleted)?)
    }

    fn format_url(&self, url: &UrlOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(url)?)
    }
}
