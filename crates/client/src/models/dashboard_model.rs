//! The dashboard body (`"dashboard"` in Grafana payloads).
//!
//! Fields the server emits with varying JSON types (`gnetId`, `tags`,
//! `label`, `allValue`, `refresh`, datasource references, the current value
//! of a multi-select variable) are kept as [`serde_json::Value`] and passed
//! through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde_helpers::null_as_default;

/// The dashboard body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardModel {
    #[serde(deserialize_with = "null_as_default")]
    pub annotations: Annotations,
    #[serde(deserialize_with = "null_as_default")]
    pub editable: bool,
    pub gnet_id: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub graph_tooltip: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub iteration: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<DashboardLink>,
    #[serde(deserialize_with = "null_as_default")]
    pub panels: Vec<DashboardPanel>,
    pub refresh: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub schema_version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub templating: Templating,
    #[serde(deserialize_with = "null_as_default")]
    pub time: TimeRange,
    #[serde(deserialize_with = "null_as_default")]
    pub timepicker: Timepicker,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
}

impl DashboardModel {
    /// Return the first panel whose ID equals `panel_id`.
    pub fn get_panel(&self, panel_id: i64) -> Option<&DashboardPanel> {
        self.panels.iter().find(|panel| panel.id == panel_id)
    }
}

/// Wrapper for the annotation list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<DashboardAnnotation>,
}

/// An annotation source overlaid on the dashboard's graphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardAnnotation {
    #[serde(deserialize_with = "null_as_default")]
    pub built_in: i64,
    /// Datasource name (older schema) or `{ "type", "uid" }` reference.
    pub datasource: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub enable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub icon_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// A link shown in the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardLink {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// One visualization inside a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardPanel {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub datasource: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub grid_pos: GridPos,
    #[serde(deserialize_with = "null_as_default")]
    pub targets: Vec<Value>,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub field_config: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub transparent: bool,
}

/// Panel placement on the 24-column dashboard grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPos {
    #[serde(deserialize_with = "null_as_default")]
    pub h: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub w: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub x: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: i64,
}

/// Wrapper for the templating variable list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templating {
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<TemplateVariable>,
}

/// A templating variable. The client does not interpret it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateVariable {
    pub all_value: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub current: VariableCurrent,
    /// 0 = visible, 1 = hide label, 2 = hide variable.
    #[serde(deserialize_with = "null_as_default")]
    pub hide: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub include_all: bool,
    pub label: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub multi: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<VariableOption>,
    pub query: Value,
    #[serde(rename = "skipUrlSync", deserialize_with = "null_as_default")]
    pub skip_url_sync: bool,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Currently selected value of a variable. Both fields become arrays when
/// the variable is multi-select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableCurrent {
    pub text: Value,
    pub value: Value,
}

/// One selectable option of a variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableOption {
    #[serde(deserialize_with = "null_as_default")]
    pub selected: bool,
    pub text: Value,
    pub value: Value,
}

/// Dashboard time range, e.g. `now-6h` to `now`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRange {
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timepicker {
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_intervals: Vec<String>,
}
