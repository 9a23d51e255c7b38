//! Catch-all handlers: unmatched routes, timeouts, and panics.

use std::any::Any;

use axum::http::Uri;
use axum::response::Response;
use tower::timeout::error::Elapsed;
use tower::BoxError;

use crate::error::{internal_server_error, AppError};

/// Any request no route claims, including a known path with the wrong method.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}

/// Map errors from the timeout middleware. Only `Elapsed` is expected here.
pub async fn handle_timeout(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request timed out");
        AppError::Timeout
    } else {
        AppError::Middleware(err.to_string())
    }
}

/// Convert a handler panic into the JSON 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(error = %message, "Handler panicked");
    internal_server_error(&message)
}
