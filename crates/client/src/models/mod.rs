//! Data models for Grafana dashboard API payloads.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access. Every model ignores unknown fields and defaults
//! absent fields to their zero value.

pub mod dashboard_model;
pub mod dashboards;

pub use dashboard_model::{
    Annotations, DashboardAnnotation, DashboardLink, DashboardModel, DashboardPanel, GridPos,
    Templating, TemplateVariable, TimeRange, Timepicker, VariableCurrent, VariableOption,
};
pub use dashboards::{
    Dashboard, DashboardDeleteResponse, DashboardMeta, DashboardSaveResponse, DashboardSearchHit,
};
