use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn config_with_assets(assets_dir: PathBuf) -> SiteConfig {
    SiteConfig { bind_addr: crate::config::DEFAULT_BIND_ADDR, port: 0, assets_dir }
}

fn temp_assets_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-routes-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

async fn get_status(router: Router, uri: &str) -> StatusCode {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let router = static_routes(&config_with_assets(temp_assets_dir("healthz")));
    assert_eq!(get_status(router, "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn assets_are_served_from_configured_dir() {
    let dir = temp_assets_dir("serve");
    std::fs::write(dir.join("hello.txt"), "hello folio").unwrap();

    let router = static_routes(&config_with_assets(dir.clone()));
    let response = router
        .oneshot(Request::builder().uri("/assets/hello.txt").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"hello folio");

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let router = static_routes(&config_with_assets(temp_assets_dir("missing")));
    assert_eq!(get_status(router, "/assets/nope.png").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let router = static_routes(&config_with_assets(temp_assets_dir("unknown")));
    assert_eq!(get_status(router, "/api/anything").await, StatusCode::NOT_FOUND);
}
