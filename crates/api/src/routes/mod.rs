pub mod health;
pub mod problems;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health        GET   service health
/// /build-info    GET   version and environment
/// /problems      GET   list problems
///                POST  validate and echo a new problem
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(problems::router())
}
