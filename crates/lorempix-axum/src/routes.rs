//! Route definitions and router construction.
//!
//! Dimensioned image routes resolve and redirect; the variant directory is
//! served as plain static files under the public prefix.

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::services::ServeDir;

use lorempix_core::VARIANT_PUBLIC_PREFIX;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Create the main router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{width}`, `{height}`.
pub fn create_router(ctx: AxumContext) -> Router {
    let variants_dir = ctx.variants_dir.clone();
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .route("/{width}/{height}", get(handlers::images::fetch))
        .route(
            "/{width}/{height}/{subject}",
            get(handlers::images::fetch_with_subject),
        )
        .nest_service(VARIANT_PUBLIC_PREFIX, ServeDir::new(variants_dir))
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
