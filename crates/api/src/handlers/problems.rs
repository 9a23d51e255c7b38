//! Handlers for the problem list and the (non-persisting) create endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use goldenpath_core::envelope::{CreatedEnvelope, ListEnvelope};
use goldenpath_core::problem::validate_new_problem;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /problems
// ---------------------------------------------------------------------------

/// Load the dataset and return it in a `{data, count, timestamp}` envelope.
pub async fn list_problems(State(state): State<AppState>) -> AppResult<Json<ListEnvelope>> {
    let records = state
        .problems
        .load()
        .await
        .map_err(AppError::DatasetUnavailable)?;

    tracing::debug!(
        source = state.problems.name(),
        count = records.len(),
        "Serving problems",
    );

    Ok(Json(ListEnvelope::new(records, Utc::now())))
}

// ---------------------------------------------------------------------------
// POST /problems
// ---------------------------------------------------------------------------

/// Validate a new problem and echo it back as `{ id, ...body, date }`.
///
/// The body is parsed by hand so malformed JSON maps to
/// `{"error": "Invalid JSON body"}` regardless of `Content-Type`.
/// The record is not stored anywhere.
pub async fn create_problem(body: Bytes) -> AppResult<impl IntoResponse> {
    let body: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;

    let problem = validate_new_problem(&body)?;
    let category = problem.category.clone();
    let record = problem.into_created(Utc::now());

    tracing::info!(
        problem_id = %record["id"],
        category = %category,
        "Problem accepted (not persisted)",
    );

    Ok((StatusCode::CREATED, Json(CreatedEnvelope::new(record))))
}
