//! Route definitions for problems.

use axum::routing::get;
use axum::Router;

use crate::handlers::problems;
use crate::state::AppState;

/// ```text
/// GET    /problems    -> list_problems
/// POST   /problems    -> create_problem
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/problems",
        get(problems::list_problems).post(problems::create_problem),
    )
}
