//! DTO for the route listing endpoint.

use serde::Serialize;

use crate::api::routing::RegisteredRoute;

#[derive(Debug, Serialize)]
pub struct RouteView {
    pub name: Option<String>,
    pub tags: Vec<String>,
    pub original_template: String,
    pub transformed_template: String,
    pub axum_paths: Vec<String>,
    /// Reason the route kept its declared form.
    pub excluded_by: Option<String>,
}

impl From<&RegisteredRoute> for RouteView {
    fn from(route: &RegisteredRoute) -> Self {
        Self {
            name: route.name.clone(),
            tags: route.tags.clone(),
            original_template: route.original.clone(),
            transformed_template: route.transformed.clone(),
            axum_paths: route.axum_paths.clone(),
            excluded_by: route.excluded.as_ref().map(ToString::to_string),
        }
    }
}
