use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use backoffice_dashboard::{server, AppConfig};
use http_body_util::BodyExt;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!doctype html><div id=\"root\"></div>";

fn bundle() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/app.js"), "console.log('dashboard');").unwrap();

    let cfg = AppConfig {
        static_dir: dir.path().to_string_lossy().into_owned(),
        ..AppConfig::default()
    };
    let app = server::router(&cfg);
    (dir, app)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_existing_assets() {
    let (_dir, app) = bundle();
    let (status, body) = get(app, "/assets/app.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('dashboard');");
}

#[tokio::test]
async fn root_serves_the_index() {
    let (_dir, app) = bundle();
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn unknown_routes_fall_back_to_the_index() {
    let (_dir, app) = bundle();
    let (status, body) = get(app, "/orders/ORD-2025-0003").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn health_reports_up() {
    let (_dir, app) = bundle();
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "up");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let (_dir, app) = bundle();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
