//! REST API endpoint implementations.
//!
//! Each function issues exactly one request through [`request`] and decodes
//! the response. The [`crate::client::GrafanaClient`] facade supplies the
//! HTTP client, base URL and credentials.

mod dashboards;
pub mod request;
pub mod url_encoding;

pub use dashboards::{
    create_dashboard, delete_dashboard, get_dashboard, get_dashboard_by_slug, save_dashboard,
    search_dashboards,
};
pub use request::{decode_json, send_request, send_request_with_error_body};
