//! Handler for health check endpoint.

use axum::extract::State;

use crate::api::dto::health::HealthResponse;
use crate::api::envelope::ApiResponse;
use crate::state::AppState;

/// Returns service status and the active naming convention.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": { "status": "healthy", "version": "0.1.0", "casing": "kebab", "jsonCasing": "camel" },
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> ApiResponse<HealthResponse> {
    ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        casing: state.options.casing,
        json_casing: state.options.json_casing,
    })
}
