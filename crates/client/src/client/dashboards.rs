//! Dashboard API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Importing dashboards and the legacy save call
//! - Getting dashboards by uid, or by slug through the legacy endpoint
//! - Searching and deleting dashboards
//!
//! # What this module does NOT handle:
//! - Low-level dashboard endpoint HTTP calls (in [`crate::endpoints`])

use serde_json::{Map, Value};

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Dashboard, DashboardSaveResponse, DashboardSearchHit};

impl GrafanaClient {
    /// Import a dashboard, optionally into a folder and overwriting an
    /// existing one with the same uid.
    pub async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<DashboardSaveResponse> {
        endpoints::create_dashboard(&self.http, &self.base_url, &self.auth, dashboard).await
    }

    /// Save a raw dashboard model through `/api/dashboards/db`.
    ///
    /// Failures carry the server's response body in
    /// [`ClientError::ApiError`](crate::ClientError::ApiError).
    #[deprecated(note = "use `create_dashboard` instead")]
    pub async fn save_dashboard(
        &self,
        model: &Map<String, Value>,
        overwrite: bool,
    ) -> Result<DashboardSaveResponse> {
        endpoints::save_dashboard(&self.http, &self.base_url, &self.auth, model, overwrite).await
    }

    /// Get a dashboard by uid.
    pub async fn get_dashboard(&self, uid: &str) -> Result<Dashboard> {
        endpoints::get_dashboard(
            &self.http,
            &self.base_url,
            &self.auth,
            uid,
            self.log_responses,
        )
        .await
    }

    /// Get a dashboard by its URL slug.
    #[deprecated(note = "slugs are not unique; use `get_dashboard` with a uid instead")]
    pub async fn get_dashboard_by_slug(&self, slug: &str) -> Result<Dashboard> {
        endpoints::get_dashboard_by_slug(
            &self.http,
            &self.base_url,
            &self.auth,
            slug,
            self.log_responses,
        )
        .await
    }

    /// Search dashboards by title, optionally restricted to one folder.
    pub async fn search_dashboards(
        &self,
        query: &str,
        folder_id: Option<i64>,
    ) -> Result<Vec<DashboardSearchHit>> {
        endpoints::search_dashboards(&self.http, &self.base_url, &self.auth, query, folder_id)
            .await
    }

    /// Delete a dashboard by uid, returning the deleted dashboard's title.
    pub async fn delete_dashboard(&self, uid: &str) -> Result<String> {
        endpoints::delete_dashboard(&self.http, &self.base_url, &self.auth, uid).await
    }
}
