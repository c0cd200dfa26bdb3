//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check (public)
//! - `/api/*`      - Demo profile API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **JSON casing** - Response property names in the configured style
//! - **Path normalization** - Trailing slash handling

use axum::http::Uri;
use axum::routing::get;
use axum::{Extension, Router, middleware};
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::json_case;
use crate::api::middleware::tracing;
use crate::api::routing::ConventionRouter;
use crate::convention::RouteMeta;
use crate::error::{AppError, ConventionError};
use crate::state::AppState;

async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}

/// Builds the router with every route and middleware except path
/// normalization.
///
/// # Errors
///
/// Fails when a route template is malformed, an exclusion pattern is
/// invalid, or two templates map to the same path.
pub fn app_service(state: AppState) -> Result<Router, ConventionError> {
    let router = ConventionRouter::new(state.options.clone())?.route_with(
        RouteMeta::new("/health").named("Health").tagged("ops"),
        get(health_handler),
    )?;
    let (router, links) = api::routes::api_routes(router)?.into_parts();

    let mut router = router
        .layer(Extension(links))
        .fallback(fallback_handler)
        .with_state(state.clone());

    if let Some(style) = state.options.json_casing {
        router = router.layer(middleware::from_fn_with_state(style, json_case::layer));
    }

    Ok(router.layer(tracing::layer()))
}

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// See [`app_service`].
pub fn app_router(state: AppState) -> Result<NormalizePath<Router>, ConventionError> {
    let router = app_service(state)?;
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
