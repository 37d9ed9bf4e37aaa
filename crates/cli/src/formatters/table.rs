//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format lists as tab-separated tables and single resources as
//!   `Key: value` lines.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use grafana_client::{Dashboard, DashboardPanel, DashboardSaveResponse, DashboardSearchHit};

use crate::formatters::common::format_json_value;
use crate::formatters::{DeletedOutput, Formatter, UrlOutput};

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn join_values(values: &[serde_json::Value]) -> String {
    values
        .iter()
        .map(format_json_value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_dashboard(&self, dashboard: &Dashboard) -> Result<String> {
        let meta = &dashboard.meta;
        let model = &dashboard.model;
        let mut output = String::new();

        output.push_str(&format!("Title: {}\n", model.title));
        output.push_str(&format!("UID: {}\n", meta.uid));
        output.push_str(&format!("Slug: {}\n", meta.slug));
        if meta.folder_title.is_empty() {
            output.push_str(&format!("Folder: {}\n", dashboard.folder));
        } else {
            output.push_str(&format!("Folder: {} ({})\n", meta.folder_title, dashboard.folder));
        }
        output.push_str(&format!("Version: {}\n", model.version));
        output.push_str(&format!("Starred: {}\n", yes_no(meta.is_starred)));
        output.push_str(&format!("Tags: {}\n", join_values(&model.tags)));
        output.push_str(&format!("Time: {} to {}\n", model.time.from, model.time.to));

        if model.panels.is_empty() {
            output.push_str("Panels: none\n");
        } else {
            output.push_str(&format!("Panels ({}):\n", model.panels.len()));
            output.push_str("  ID\tType\tTitle\n");
            for panel in &model.panels {
                output.push_str(&format!(
                    "  {}\t{}\t{}\n",
                    panel.id, panel.kind, panel.title
                ));
            }
        }

        if !model.templating.list.is_empty() {
            output.push_str("Variables:\n");
            for variable in &model.templating.list {
                output.push_str(&format!(
                    "  {}\t{}\t{}\n",
                    variable.name,
                    variable.kind,
                    format_json_value(&variable.current.value)
                ));
            }
        }

        Ok(output)
    }

    fn format_search_hits(&self, hits: &[DashboardSearchHit]) -> Result<String> {
        if hits.is_empty() {
            return Ok("No dashboards found.".to_string());
        }

        let mut output = String::new();
        output.push_str("UID\tTitle\tFolder\tStarred\tURL\n");

        for hit in hits {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                hit.uid,
                hit.title,
                hit.folder_title,
                yes_no(hit.starred),
                hit.url
            ));
        }

        Ok(output)
    }

    fn format_save_response(&self, response: &DashboardSaveResponse) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Status: {}\n", response.status));
        output.push_str(&format!("ID: {}\n", response.id));
        output.push_str(&format!("UID: {}\n", response.uid));
        output.push_str(&format!("Slug: {}\n", response.slug));
        output.push_str(&format!("URL: {}\n", response.url));
        output.push_str(&format!("Version: {}\n", response.version));
        Ok(output)
    }

    fn format_panel(&self, panel: &DashboardPanel) -> Result<String> {
        let grid = &panel.grid_pos;
        let mut output = String::new();
        output.push_str(&format!("ID: {}\n", panel.id));
        output.push_str(&format!("Title: {}\n", panel.title));
        output.push_str(&format!("Type: {}\n", panel.kind));
        if !panel.description.is_empty() {
            output.push_str(&format!("Description: {}\n", panel.description));
        }
        output.push_str(&format!(
            "Datasource: {}\n",
            format_json_value(&panel.datasource)
        ));
        output.push_str(&format!(
            "Position: x={} y={} w={} h={}\n",
            grid.x, grid.y, grid.w, grid.h
        ));
        output.push_str(&format!("Targets: {}\n", panel.targets.len()));
        Ok(output)
    }

    fn format_deleted(&self, deleted: &DeletedOutput) -> Result<String> {
        Ok(format!(
            "Deleted dashboard: {} ({})\n",
            deleted.title, deleted.uid
        ))
    }

    fn format_url(&self, url: &UrlOutput) -> Result<String> {
        Ok(format!("{}\n", url.url))
    }
}
