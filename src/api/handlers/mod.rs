//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod profiles;
pub mod routes;

pub use health::health_handler;
pub use profiles::{
    create_profile_handler, get_profile_by_name_handler, get_profile_handler,
    list_profiles_handler, profile_activity_handler, profile_links_handler,
    search_profiles_handler,
};
pub use routes::routes_handler;
