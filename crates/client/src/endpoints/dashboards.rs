//! Dashboard endpoints.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::request::{decode_json, send_request, send_request_with_error_body};
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{Dashboard, DashboardDeleteResponse, DashboardSaveResponse, DashboardSearchHit};

/// Body of the legacy `/api/dashboards/db` save call.
#[derive(Serialize)]
struct SaveDashboardRequest<'a> {
    dashboard: &'a Map<String, Value>,
    overwrite: bool,
}

/// Import a dashboard (`POST /api/dashboards/import`).
pub async fn create_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    dashboard: &Dashboard,
) -> Result<DashboardSaveResponse> {
    let body = serde_json::to_vec(dashboard).map_err(ClientError::InvalidRequest)?;
    let endpoint = "/api/dashboards/import";

    let builder = auth.apply(
        client
            .post(format!("{}{}", base_url, endpoint))
            .header(CONTENT_TYPE, "application/json")
            .body(body),
    );

    let response = send_request(builder, "POST", endpoint).await?;
    let bytes = response.bytes().await?;
    decode_json(&bytes)
}

/// Save a raw dashboard model through the legacy `POST /api/dashboards/db`.
///
/// Unlike the other endpoints, a failure keeps the response body in the
/// returned [`ClientError::ApiError`].
pub async fn save_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    model: &Map<String, Value>,
    overwrite: bool,
) -> Result<DashboardSaveResponse> {
    let body = serde_json::to_vec(&SaveDashboardRequest {
        dashboard: model,
        overwrite,
    })
    .map_err(ClientError::InvalidRequest)?;
    let endpoint = "/api/dashboards/db";

    let builder = auth.apply(
        client
            .post(format!("{}{}", base_url, endpoint))
            .header(CONTENT_TYPE, "application/json")
            .body(body),
    );

    let response = send_request_with_error_body(builder, "POST", endpoint).await?;
    let bytes = response.bytes().await?;
    decode_json(&bytes)
}

/// Get a dashboard by uid (`GET /api/dashboards/uid/{uid}`).
///
/// Grafana does not echo the uid in `meta`, so the requested uid is written
/// back into `meta.uid`.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    uid: &str,
    log_responses: bool,
) -> Result<Dashboard> {
    let endpoint = format!("/api/dashboards/uid/{}", encode_path_segment(uid));
    let mut dashboard = fetch_dashboard(client, base_url, auth, &endpoint, log_responses).await?;
    dashboard.meta.uid = uid.to_string();
    Ok(dashboard)
}

/// Get a dashboard by slug through the legacy `GET /api/dashboards/db/{slug}`.
pub async fn get_dashboard_by_slug(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    slug: &str,
    log_responses: bool,
) -> Result<Dashboard> {
    let endpoint = format!("/api/dashboards/db/{}", encode_path_segment(slug));
    fetch_dashboard(client, base_url, auth, &endpoint, log_responses).await
}

async fn fetch_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    endpoint: &str,
    log_responses: bool,
) -> Result<Dashboard> {
    let builder = auth.apply(client.get(format!("{}{}", base_url, endpoint)));

    let response = send_request(builder, "GET", endpoint).await?;
    let bytes = response.bytes().await?;

    if log_responses {
        debug!(
            endpoint,
            body = %String::from_utf8_lossy(&bytes),
            "Got back dashboard response"
        );
    }

    let mut dashboard: Dashboard = decode_json(&bytes)?;
    dashboard.folder = dashboard.meta.folder;
    Ok(dashboard)
}

/// Search dashboards (`GET /api/search?type=dash-db`).
///
/// `folderIds` is only sent when `folder_id` is given. No matches, including
/// a `null` body, yields an empty vector.
pub async fn search_dashboards(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    query: &str,
    folder_id: Option<i64>,
) -> Result<Vec<DashboardSearchHit>> {
    let endpoint = "/api/search";

    let mut query_params: Vec<(&str, String)> = vec![
        ("type", "dash-db".to_string()),
        ("query", query.to_string()),
    ];
    if let Some(id) = folder_id {
        query_params.push(("folderIds", id.to_string()));
    }

    let builder = auth.apply(
        client
            .get(format!("{}{}", base_url, endpoint))
            .query(&query_params),
    );

    let response = send_request(builder, "GET", endpoint).await?;
    let bytes = response.bytes().await?;
    let hits: Option<Vec<DashboardSearchHit>> = decode_json(&bytes)?;
    Ok(hits.unwrap_or_default())
}

/// Delete a dashboard by uid and return its title.
pub async fn delete_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    uid: &str,
) -> Result<String> {
    let endpoint = format!("/api/dashboards/uid/{}", encode_path_segment(uid));
    let builder = auth.apply(client.delete(format!("{}{}", base_url, endpoint)));

    let response = send_request(builder, "DELETE", &endpoint).await?;
    let bytes = response.bytes().await?;
    let deleted: DashboardDeleteResponse = decode_json(&bytes)?;
    Ok(deleted.title)
}
