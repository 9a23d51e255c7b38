use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use goldenpath_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as a JSON object with an `error` key.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `goldenpath_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON body")]
    InvalidJson,

    /// The dataset source failed to produce records.
    #[error("Failed to load problems data: {0}")]
    DatasetUnavailable(#[source] CoreError),

    /// No route matched the request.
    #[error("Not Found: {path}")]
    NotFound { path: String },

    /// The request outlived the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// A middleware layer failed for a reason other than a timeout.
    #[error("{0}")]
    Middleware(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(err @ (CoreError::MissingField(_) | CoreError::InvalidField(_))) => {
                (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() }))
            }
            AppError::Core(err) => {
                tracing::error!(error = %err, "Unhandled core error");
                return internal_server_error(&err.to_string());
            }
            AppError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON body" }),
            ),
            AppError::DatasetUnavailable(err) => {
                tracing::error!(error = %err, "Error loading problems data");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to load problems data",
                        "message": err.to_string(),
                    }),
                )
            }
            AppError::NotFound { path } => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Not Found", "path": path }),
            ),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                json!({
                    "error": "Request Timeout",
                    "message": "Request timed out",
                }),
            ),
            AppError::Middleware(message) => {
                tracing::error!(error = %message, "Middleware error");
                return internal_server_error(&message);
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// The catch-all 500 body: `{ "error": "Internal Server Error", "message": ... }`.
pub fn internal_server_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "error": "Internal Server Error",
            "message": message,
        })),
    )
        .into_response()
}
