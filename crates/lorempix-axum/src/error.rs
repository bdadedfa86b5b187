//! HTTP error types and mappings.
//!
//! Maps core resolution failures to HTTP status codes and JSON response
//! bodies. The split is deliberate: failures that mean "there is no image to
//! give you" become 404, failures on the server's own side of the pipeline
//! become 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lorempix_core::ResolveError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<ResolveError> for HttpError {
    fn from(err: ResolveError) -> Self {
        // Client-visible bodies carry the top-level message only; the cause
        // chain stays in the server log.
        let message = err.to_string();
        match err {
            ResolveError::CatalogUnavailable(_)
            | ResolveError::CatalogEmpty
            | ResolveError::SourceMissing(_) => Self::NotFound(message),
            ResolveError::OutputCreate(_) | ResolveError::Transform(_) => Self::Internal(message),
        }
    }
}
