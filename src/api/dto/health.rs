//! DTOs for health check endpoint.

use serde::Serialize;

use crate::casing::CasingStyle;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub casing: CasingStyle,
    pub json_casing: Option<CasingStyle>,
}
