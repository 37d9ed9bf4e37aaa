//! Dashboard envelope models for the Grafana dashboard API.
//!
//! This module contains the request/response wrappers around a dashboard
//! body: the fetched/imported [`Dashboard`], save and delete responses, and
//! the lightweight rows returned by search.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::endpoints::url_encoding::{dashboard_vars_query, encode_path_segment};
use crate::models::dashboard_model::{DashboardModel, DashboardPanel};
use crate::serde_helpers::null_as_default;

/// Server-side metadata returned alongside a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_starred: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(rename = "folderId", deserialize_with = "null_as_default")]
    pub folder: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub folder_title: String,
}

/// A dashboard as fetched from, or imported into, Grafana.
///
/// `folder` and `overwrite` only matter on write. After a fetch the client
/// copies `meta.folder` into `folder` so the value can be re-imported as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: DashboardMeta,
    #[serde(rename = "dashboard", deserialize_with = "null_as_default")]
    pub model: DashboardModel,
    #[serde(rename = "folderId", deserialize_with = "null_as_default")]
    pub folder: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub overwrite: bool,
}

impl Dashboard {
    /// Wrap a dashboard body for import into `folder`.
    pub fn new(model: DashboardModel, folder: i64, overwrite: bool) -> Self {
        Self {
            meta: DashboardMeta::default(),
            model,
            folder,
            overwrite,
        }
    }

    /// Return the first panel whose ID equals `panel_id`.
    pub fn get_panel(&self, panel_id: i64) -> Option<&DashboardPanel> {
        self.model.get_panel(panel_id)
    }

    /// Build the frontend path for this dashboard with templating variables applied.
    ///
    /// Each value produces one `var-{name}={value}` pair. Names are emitted in
    /// sorted order; values keep their input order.
    /// With no variables the path has no query and no trailing `?`.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use grafana_client::models::Dashboard;
    ///
    /// let mut dashboard = Dashboard::default();
    /// dashboard.meta.uid = "xyz".to_string();
    ///
    /// let vars = HashMap::from([(
    ///     "env".to_string(),
    ///     vec!["prod".to_string(), "staging".to_string()],
    /// )]);
    /// assert_eq!(
    ///     dashboard.frontend_url(&vars),
    ///     "/d/xyz?var-env=prod&var-env=staging"
    /// );
    /// ```
    pub fn frontend_url(&self, dashboard_vars: &HashMap<String, Vec<String>>) -> String {
        let mut url = format!("/d/{}", encode_path_segment(&self.meta.uid));
        let query = dashboard_vars_query(dashboard_vars);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

/// Response to a dashboard import or save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSaveResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
}

/// One row of a dashboard search.
///
/// This is a projection, not a [`Dashboard`]; fetch by `uid` to get the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardSearchHit {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "isStarred", deserialize_with = "null_as_default")]
    pub starred: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub folder_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub folder_uid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub folder_title: String,
}

/// Response to a dashboard deletion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardDeleteResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}
