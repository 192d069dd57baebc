//! Integration tests for health check endpoints
//!
//! Liveness routes never touch the database. Readiness is checked both
//! against an unreachable database and, when one is available, a live one.

mod common;

use axum::{body::Body, http::Request, http::StatusCode, Router};
use tower::ServiceExt;

use common::{lazy_pool, test_app};

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_root_endpoint() {
    let (status, body) = get(test_app(lazy_pool()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("Linkboard"));
}

#[tokio::test]
async fn test_simple_health_check() {
    let (status, body) = get(test_app(lazy_pool()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_liveness_probe() {
    let (status, body) = get(test_app(lazy_pool()), "/health/live").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "alive");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let (status, body) = get(test_app(lazy_pool()), "/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["services"][0]["name"], "database");
    assert!(json["services"][0]["error"].is_string());
}

#[tokio::test]
async fn test_readiness_with_database() {
    require_db!(pool);

    let (status, body) = get(test_app(pool), "/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["services"][0]["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get(test_app(lazy_pool()), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
