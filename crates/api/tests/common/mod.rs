#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use goldenpath_api::config::ServerConfig;
use goldenpath_api::router::build_app_router;
use goldenpath_api::state::AppState;
use goldenpath_core::dataset::ProblemSource;
use goldenpath_core::problem::{ProblemRecord, ProblemStatus};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["https://tiga2000.com".to_string()],
        allow_localhost_origins: true,
        request_timeout_secs: 30,
        api_version: "1.0.0".to_string(),
        environment: "test".to_string(),
        data_path: None,
    }
}

/// Build the full application router over `source`, using the same
/// middleware stack as production.
pub fn build_test_app(source: impl ProblemSource + 'static) -> Router {
    build_test_app_with_config(test_config(), source)
}

pub fn build_test_app_with_config(
    config: ServerConfig,
    source: impl ProblemSource + 'static,
) -> Router {
    build_app_router(AppState::new(config, Arc::new(source)))
}

/// Five fixture records: three resolved, two ongoing.
pub fn fixture_records() -> Vec<ProblemRecord> {
    let statuses = [
        ProblemStatus::Resolved,
        ProblemStatus::Ongoing,
        ProblemStatus::Resolved,
        ProblemStatus::Ongoing,
        ProblemStatus::Resolved,
    ];
    statuses
        .into_iter()
        .enumerate()
        .map(|(i, status)| ProblemRecord {
            id: i as i64 + 1,
            title: format!("Fixture problem {}", i + 1),
            category: "Testing".to_string(),
            description: "Something broke".to_string(),
            solution: "Something fixed it".to_string(),
            status,
            date: "2024-06-01".to_string(),
        })
        .collect()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
