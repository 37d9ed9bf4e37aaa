//! Dashboard endpoint tests.
//!
//! This module tests the Grafana dashboard API:
//! - Getting dashboards by uid and by slug
//! - Importing dashboards and the legacy save call
//! - Searching and deleting dashboards
//!
//! # Invariants
//! - Only a `200 OK` response is a success
//! - `meta.uid` is set to the requested uid on fetch
//! - `folder` mirrors `meta.folderId` after a fetch
//! - Only the legacy save error keeps the response body

mod common;

use common::*;
use grafana_client::ClientError;
use grafana_client::models::{Dashboard, DashboardModel};
use serde_json::{Map, json};
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};

#[tokio::test]
async fn test_get_dashboard() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("dashboards/get_dashboard.json");

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc123"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::get_dashboard(
        &client,
        &mock_server.uri(),
        &token_auth(),
        "abc123",
        false,
    )
    .await;

    if let Err(ref e) = result {
        eprintln!("Get dashboard error: {:?}", e);
    }
    let dashboard = result.unwrap();

    assert_eq!(dashboard.meta.uid, "abc123");
    assert_eq!(dashboard.meta.slug, "cpu-usage");
    assert!(dashboard.meta.is_starred);
    assert_eq!(dashboard.meta.folder, 7);
    assert_eq!(dashboard.meta.folder_title, "Operations");
    assert_eq!(dashboard.folder, 7);

    let model = &dashboard.model;
    assert_eq!(model.id, 42);
    assert_eq!(model.title, "CPU Usage");
    assert_eq!(model.schema_version, 27);
    assert_eq!(model.refresh, json!("30s"));
    assert_eq!(model.tags, vec![json!("linux"), json!("cpu")]);
    assert_eq!(model.panels.len(), 3);
    assert_eq!(model.annotations.list.len(), 1);
    assert_eq!(model.annotations.list[0].kind, "dashboard");
    assert_eq!(model.time.from, "now-6h");
    assert_eq!(model.timepicker.refresh_intervals.len(), 4);

    let host = &model.templating.list[0];
    assert_eq!(host.name, "host");
    assert!(host.multi);
    assert_eq!(host.label, json!("Host"));
    assert_eq!(host.current.value, json!("web-01"));
    assert_eq!(host.options.len(), 2);
    assert!(host.options[0].selected);
}

#[tokio::test]
async fn test_get_dashboard_overrides_meta_uid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"uid": "something-else"},
            "dashboard": {"uid": "abc123", "title": "CPU"}
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let dashboard =
        endpoints::get_dashboard(&client, &mock_server.uri(), &token_auth(), "abc123", true)
            .await
            .unwrap();

    assert_eq!(dashboard.meta.uid, "abc123");
    assert_eq!(dashboard.folder, 0);
}

#[tokio::test]
async fn test_get_dashboard_encodes_uid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/team%2Fa%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"dashboard": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let dashboard =
        endpoints::get_dashboard(&client, &mock_server.uri(), &token_auth(), "team/a b", false)
            .await
            .unwrap();

    assert_eq!(dashboard.meta.uid, "team/a b");
}

#[tokio::test]
async fn test_get_dashboard_panel_lookup() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("dashboards/get_dashboard.json");

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let dashboard =
        endpoints::get_dashboard(&client, &mock_server.uri(), &token_auth(), "abc123", false)
            .await
            .unwrap();

    let panel = dashboard.get_panel(2).expect("panel 2 exists");
    assert_eq!(panel.title, "Memory");
    assert_eq!(panel.kind, "graph");
    assert_eq!(panel.description, "Resident memory");
    assert_eq!(panel.grid_pos.x, 12);

    let cpu = dashboard.get_panel(1).expect("panel 1 exists");
    assert_eq!(cpu.datasource["uid"], json!("prom"));
    assert_eq!(cpu.targets.len(), 1);

    assert!(dashboard.get_panel(99).is_none());
}

#[tokio::test]
async fn test_get_dashboard_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Dashboard not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_dashboard(&client, &mock_server.uri(), &token_auth(), "missing", false)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        ClientError::ApiError {
            status,
            message,
            body,
            url,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "404 Not Found");
            assert!(body.is_none());
            assert!(url.ends_with("/api/dashboards/uid/missing"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_dashboard_non_200_success_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc123"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"dashboard": {}})))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_dashboard(&client, &mock_server.uri(), &token_auth(), "abc123", false)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(202));
}

#[tokio::test]
async fn test_get_dashboard_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_dashboard(&client, &mock_server.uri(), &token_auth(), "abc123", false)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_get_dashboard_by_slug() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("dashboards/get_dashboard_by_slug.json");

    Mock::given(method("GET"))
        .and(path("/api/dashboards/db/legacy-board"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let dashboard = endpoints::get_dashboard_by_slug(
        &client,
        &mock_server.uri(),
        &token_auth(),
        "legacy-board",
        false,
    )
    .await
    .unwrap();

    assert_eq!(dashboard.meta.slug, "legacy-board");
    assert_eq!(dashboard.meta.uid, "");
    assert_eq!(dashboard.folder, 0);
    assert_eq!(dashboard.model.uid, "legacy-uid");
    assert_eq!(dashboard.model.title, "Legacy Board");
    assert!(dashboard.model.panels.is_empty());
    assert!(dashboard.model.tags.is_empty());
    assert!(dashboard.model.templating.list.is_empty());
}

#[tokio::test]
async fn test_create_dashboard() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("dashboards/create_dashboard.json");

    Mock::given(method("POST"))
        .and(path("/api/dashboards/import"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "folderId": 7,
            "overwrite": true,
            "dashboard": {"title": "CPU Usage", "uid": "abc123"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let model = DashboardModel {
        title: "CPU Usage".to_string(),
        uid: "abc123".to_string(),
        ..DashboardModel::default()
    };
    let dashboard = Dashboard::new(model, 7, true);

    let client = Client::new();
    let response =
        endpoints::create_dashboard(&client, &mock_server.uri(), &token_auth(), &dashboard)
            .await
            .unwrap();

    assert_eq!(response.id, 42);
    assert_eq!(response.uid, "abc123");
    assert_eq!(response.slug, "cpu-usage");
    assert_eq!(response.status, "success");
    assert_eq!(response.url, "/d/abc123/cpu-usage");
    assert_eq!(response.version, 4);
}

#[tokio::test]
async fn test_create_dashboard_preserves_full_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/import"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("dashboards/create_dashboard.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetched: Dashboard =
        serde_json::from_value(load_fixture("dashboards/get_dashboard.json")).unwrap();
    let dashboard = Dashboard::new(fetched.model.clone(), 7, false);

    let client = Client::new();
    endpoints::create_dashboard(&client, &mock_server.uri(), &token_auth(), &dashboard)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let sent: Dashboard = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent.model, fetched.model);
    assert_eq!(sent.model.panels.len(), 3);
    assert_eq!(sent.folder, 7);
    assert!(!sent.overwrite);
}

#[tokio::test]
async fn test_create_dashboard_error_has_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/import"))
        .respond_with(
            ResponseTemplate::new(412)
                .set_body_json(load_fixture("dashboards/save_dashboard_conflict.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::create_dashboard(
        &client,
        &mock_server.uri(),
        &token_auth(),
        &Dashboard::default(),
    )
    .await
    .unwrap_err();

    match err {
        ClientError::ApiError { status, body, .. } => {
            assert_eq!(status, 412);
            assert!(body.is_none());
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_save_dashboard_legacy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .and(body_json(json!({
            "dashboard": {"title": "Raw", "panels": []},
            "overwrite": false
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("dashboards/create_dashboard.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut model = Map::new();
    model.insert("title".to_string(), json!("Raw"));
    model.insert("panels".to_string(), json!([]));

    let client = Client::new();
    let response =
        endpoints::save_dashboard(&client, &mock_server.uri(), &token_auth(), &model, false)
            .await
            .unwrap();

    assert_eq!(response.status, "success");
}

#[tokio::test]
async fn test_save_dashboard_error_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(
            ResponseTemplate::new(412)
                .set_body_json(load_fixture("dashboards/save_dashboard_conflict.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err =
        endpoints::save_dashboard(&client, &mock_server.uri(), &token_auth(), &Map::new(), true)
            .await
            .unwrap_err();

    let rendered = err.to_string();
    match err {
        ClientError::ApiError { status, body, .. } => {
            assert_eq!(status, 412);
            let body = body.expect("legacy save keeps the body");
            assert!(body.contains("name-exists"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
    assert!(rendered.contains("412"));
    assert!(rendered.contains("name-exists"));
}

#[tokio::test]
async fn test_search_dashboards_with_folder() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("dashboards/search_dashboards.json");

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("type", "dash-db"))
        .and(query_param("query", "cpu"))
        .and(query_param("folderIds", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let hits =
        endpoints::search_dashboards(&client, &mock_server.uri(), &token_auth(), "cpu", Some(7))
            .await
            .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].uid, "abc123");
    assert_eq!(hits[0].title, "CPU Usage");
    assert!(hits[0].starred);
    assert_eq!(hits[0].folder_id, 7);
    assert_eq!(hits[0].folder_title, "Operations");
    assert_eq!(hits[1].uid, "def456");
    assert!(!hits[1].starred);
    assert_eq!(hits[1].folder_id, 0);
}

#[tokio::test]
async fn test_search_dashboards_without_folder_omits_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("type", "dash-db"))
        .and(query_param("query", "cpu"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("dashboards/search_dashboards.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let hits = endpoints::search_dashboards(&client, &mock_server.uri(), &token_auth(), "cpu", None)
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0]
            .url
            .query_pairs()
            .any(|(key, _)| key == "folderIds")
    );
}

#[tokio::test]
async fn test_search_dashboards_null_and_empty() {
    for body in ["null", "[]"] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let hits =
            endpoints::search_dashboards(&client, &mock_server.uri(), &token_auth(), "none", None)
                .await
                .unwrap();

        assert!(hits.is_empty(), "body {body} should yield no hits");
    }
}

#[tokio::test]
async fn test_delete_dashboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/dashboards/uid/abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("dashboards/delete_dashboard.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let title = endpoints::delete_dashboard(&client, &mock_server.uri(), &token_auth(), "abc123")
        .await
        .unwrap();

    assert_eq!(title, "CPU Usage");
}

#[tokio::test]
async fn test_delete_dashboard_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/dashboards/uid/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::delete_dashboard(&client, &mock_server.uri(), &token_auth(), "gone")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_basic_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/dashboards/uid/abc123"))
        .and(header("Authorization", "Basic YWRtaW46YWRtaW4="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "CPU Usage"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = AuthStrategy::Basic {
        username: "admin".to_string(),
        password: secrecy::SecretString::new("admin".to_string().into()),
    };

    let client = Client::new();
    let title = endpoints::delete_dashboard(&client, &mock_server.uri(), &auth, "abc123")
        .await
        .unwrap();

    assert_eq!(title, "CPU Usage");
}
