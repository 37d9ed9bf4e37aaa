//! Grafana HTTP API client.
//!
//! This crate provides a type-safe client for the dashboard endpoints of the
//! Grafana HTTP API. It supports API token (service account) and basic
//! authentication.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    Annotations, Dashboard, DashboardAnnotation, DashboardDeleteResponse, DashboardLink,
    DashboardMeta, DashboardModel, DashboardPanel, DashboardSaveResponse, DashboardSearchHit,
    GridPos, TemplateVariable, Templating, TimeRange, Timepicker, VariableCurrent,
    VariableOption,
};
