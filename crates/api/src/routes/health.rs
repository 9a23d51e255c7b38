use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use goldenpath_core::types::iso_timestamp;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy`; the endpoint checks no dependencies.
    pub status: &'static str,
    pub timestamp: String,
    /// Configured API version.
    pub version: String,
    pub environment: String,
}

/// Build metadata payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfoResponse {
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub api_version: String,
    pub environment: String,
    pub build_time: String,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: iso_timestamp(Utc::now()),
        version: state.config.api_version.clone(),
        environment: state.config.environment.clone(),
    })
}

/// GET /build-info
async fn build_info(State(state): State<AppState>) -> Json<BuildInfoResponse> {
    Json(BuildInfoResponse {
        version: env!("CARGO_PKG_VERSION"),
        api_version: state.config.api_version.clone(),
        environment: state.config.environment.clone(),
        build_time: iso_timestamp(Utc::now()),
    })
}

/// Mount health and build-info routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/build-info", get(build_info))
}
