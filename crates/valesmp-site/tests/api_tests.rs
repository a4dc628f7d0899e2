//! Integration tests for the site's pages and JSON endpoints.
//!
//! Tests use the `Router` directly via `tower::ServiceExt` without
//! starting a TCP server for the site itself. Proxy tests spawn a mock
//! stats backend on a loopback port; the mcsrvstat.us poller is not
//! exercised here, the client and ranking layers have their own unit
//! tests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path as AxumPath, RawQuery};
use axum::http::{Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;
use valesmp_site::router::build_router;
use valesmp_site::state::AppState;
use valesmp_site::templates::Templates;
use valesmp_stats::StatsClient;
use valesmp_types::ServerStatus;

fn make_test_state() -> Arc<AppState> {
    // The backend is never contacted by the routes under test.
    let client = StatsClient::new("http://backend.invalid:8080", "test-key");
    let templates = Templates::new().unwrap();
    Arc::new(AppState::new(client, templates))
}

/// Serve a mock stats backend on a loopback port, returning its base URL.
async fn spawn_backend(backend: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, backend).await;
    });
    format!("http://{addr}")
}

fn make_state_for(base_url: &str) -> Arc<AppState> {
    let client = StatsClient::new(base_url, "test-key");
    let templates = Templates::new().unwrap();
    Arc::new(AppState::new(client, templates))
}

async fn get(router: axum::Router, path: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_the_landing_page() {
    let router = build_router(make_test_state());
    let (status, body) = get(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ValeSMP"));
    assert!(body.contains("play.valesmp.com"));
}

#[tokio::test]
async fn index_shows_offline_before_first_poll() {
    let router = build_router(make_test_state());
    let (status, body) = get(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Offline"));
}

#[tokio::test]
async fn player_count_serves_the_snapshot() {
    let state = make_test_state();
    *state.status.write().await = ServerStatus {
        online: true,
        players: 17,
        max: 40,
        version: Some(String::from("1.21.7")),
        motd: Some(String::from("Welcome to ValeSMP")),
    };
    let router = build_router(state);

    let (status, body) = get(router, "/api/player-count").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["online"], Value::Bool(true));
    assert_eq!(json["players"].as_u64(), Some(17));
    assert_eq!(json["max"].as_u64(), Some(40));
    assert_eq!(json["motd"].as_str(), Some("Welcome to ValeSMP"));
}

#[tokio::test]
async fn player_count_defaults_to_offline_zeroes() {
    let router = build_router(make_test_state());
    let (status, body) = get(router, "/api/player-count").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["online"], Value::Bool(false));
    assert_eq!(json["players"].as_u64(), Some(0));
    assert!(json["version"].is_null());
}

#[tokio::test]
async fn guide_opens_at_the_default_entry() {
    let router = build_router(make_test_state());
    let (status, body) = get(router, "/guide").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Server Rules"));
    assert!(body.contains("Quick Command Reference"));
}

#[tokio::test]
async fn guide_entries_render_their_content() {
    let router = build_router(make_test_state());
    let (status, body) = get(router, "/guide/three-worlds").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Three Unique Worlds"));
    // Inline code from the markdown-lite renderer.
    assert!(body.contains("<code>/server smp</code>"));
}

#[tokio::test]
async fn unknown_guide_entry_is_404() {
    let router = build_router(make_test_state());
    let (status, body) = get(router, "/guide/no-such-entry").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"]
        .as_str()
        .is_some_and(|msg| msg.contains("no-such-entry")));
}

#[tokio::test]
async fn maps_page_embeds_all_three_worlds() {
    let router = build_router(make_test_state());
    let (status, body) = get(router, "/maps").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("https://survival.valesmp.com"));
    assert!(body.contains("https://creative.valesmp.com"));
    assert!(body.contains("https://resource.valesmp.com"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let router = build_router(make_test_state());
    let (status, _) = get(router, "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn privacy_and_terms_pages_render() {
    let router = build_router(make_test_state());

    let (status, body) = get(router.clone(), "/privacy").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Privacy Policy"));
    assert!(body.contains("Information We Collect"));

    let (status, body) = get(router, "/terms").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Terms of Use"));
    // Terms point back at the privacy policy.
    assert!(body.contains(r#"<a href="/privacy""#));
}

#[tokio::test]
async fn proxy_forwards_path_and_query_to_the_backend() {
    // The mock echoes what it received so the test can assert the
    // forwarded path and the verbatim query string.
    let backend = axum::Router::new().route(
        "/api/stats/{*path}",
        axum::routing::get(
            |AxumPath(path): AxumPath<String>, RawQuery(query): RawQuery| async move {
                Json(json!({ "path": path, "query": query }))
            },
        ),
    );
    let base_url = spawn_backend(backend).await;
    let router = build_router(make_state_for(&base_url));

    let (status, body) = get(
        router,
        "/api/stats/top/minecraft:mined:minecraft:stone?limit=50&window=all%20time",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["path"].as_str(),
        Some("top/minecraft:mined:minecraft:stone")
    );
    assert_eq!(json["query"].as_str(), Some("limit=50&window=all%20time"));
}

#[tokio::test]
async fn proxy_mirrors_upstream_error_status_and_body() {
    let backend = axum::Router::new().route(
        "/api/stats/{*path}",
        axum::routing::get(|| async { (StatusCode::IM_A_TEAPOT, "not json") }),
    );
    let base_url = spawn_backend(backend).await;
    let router = build_router(make_state_for(&base_url));

    let (status, body) = get(router, "/api/stats/top/minecraft:custom:minecraft:jump").await;
    assert_eq!(status, StatusCode::IM_A_TEAPOT);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"].as_str(), Some("API request failed: 418"));
}

#[tokio::test]
async fn proxy_reports_500_when_the_backend_is_unreachable() {
    let router = build_router(make_test_state());
    let (status, body) = get(router, "/api/stats/all").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"].as_str(), Some("Internal server error"));
}

#[tokio::test]
async fn head_proxy_is_503_when_the_backend_is_unreachable() {
    let router = build_router(make_test_state());
    let response = router
        .oneshot(Request::head("/api/stats/all").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
