//! DTOs for the user profile endpoints.

use serde::Serialize;

use crate::store::Profile;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub items: Vec<Profile>,
    pub total: usize,
    pub page_size: usize,
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub user_id: u64,
    /// Catch-all path below `/activity`, `None` for the whole feed.
    pub activity_path: Option<String>,
    pub profile_link: Option<String>,
}

/// Links generated for a profile from the registered routes.
#[derive(Debug, Serialize)]
pub struct ProfileLinks {
    pub user_id: u64,
    pub self_link: Option<String>,
    pub by_name_link: Option<String>,
    pub activity_link: Option<String>,
}
