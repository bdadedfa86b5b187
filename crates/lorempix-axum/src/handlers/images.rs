//! Image request handlers.
//!
//! Both routes resolve a variant and answer with a redirect; the bytes
//! themselves are served by the static file service over the variant
//! directory.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::HttpError;
use crate::state::AppState;

/// Resolve a `width` x `height` variant from a random source image.
pub async fn fetch(
    State(state): State<AppState>,
    Path((width, height)): Path<(u32, u32)>,
) -> Result<Response, HttpError> {
    resolve_and_redirect(&state, width, height, "").await
}

/// Resolve a variant, narrowing the source pick by a subject keyword.
pub async fn fetch_with_subject(
    State(state): State<AppState>,
    Path((width, height, subject)): Path<(u32, u32, String)>,
) -> Result<Response, HttpError> {
    resolve_and_redirect(&state, width, height, &subject).await
}

async fn resolve_and_redirect(
    state: &AppState,
    width: u32,
    height: u32,
    subject: &str,
) -> Result<Response, HttpError> {
    if width == 0 || height == 0 {
        return Err(HttpError::BadRequest(
            "width and height must be positive".to_string(),
        ));
    }

    let resolved = match state.resolver.resolve(width, height, subject).await {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::warn!(width, height, subject, error = ?e, "variant resolution failed");
            return Err(e.into());
        }
    };

    tracing::debug!(
        path = %resolved.public_path,
        disposition = ?resolved.disposition,
        "redirecting to variant"
    );

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, resolved.public_path)],
    )
        .into_response())
}
