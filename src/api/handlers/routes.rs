//! Handler listing the registered routes.

use axum::Extension;

use crate::api::dto::routes::RouteView;
use crate::api::envelope::ApiResponse;
use crate::api::routing::RouteTable;

/// `GET /api/routes`
///
/// Each route with its declared template, the template after the naming
/// convention was applied, and the paths registered with axum.
pub async fn routes_handler(
    Extension(links): Extension<RouteTable>,
) -> ApiResponse<Vec<RouteView>> {
    ApiResponse::ok(links.routes().iter().map(RouteView::from).collect())
}
