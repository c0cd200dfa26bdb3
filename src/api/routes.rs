//! Demo API route declarations.
//!
//! Templates are written in PascalCase and registered in the configured
//! casing (kebab by default):
//!
//! - `GET  /Api/UserProfiles`                               - list profiles
//! - `POST /Api/UserProfiles`                               - create a profile
//! - `GET  /Api/UserProfiles/Search`                        - search by query
//! - `GET  /Api/UserProfiles/{UserId:int}`                  - one profile
//! - `GET  /Api/UserProfiles/ByName/{DisplayName}`          - profile by name slug
//! - `GET  /Api/UserProfiles/{UserId:int}/Links`            - generated links
//! - `GET  /Api/UserProfiles/{UserId:int}/Activity/{**Path?}` - activity feed
//! - `GET  /Api/Routes`                                     - registered routes

use axum::routing::get;

use crate::api::handlers::profiles::{
    GET_PROFILE, GET_PROFILE_BY_NAME, LIST_PROFILES, PROFILE_ACTIVITY,
};
use crate::api::handlers::{
    create_profile_handler, get_profile_by_name_handler, get_profile_handler,
    list_profiles_handler, profile_activity_handler, profile_links_handler, routes_handler,
    search_profiles_handler,
};
use crate::api::routing::ConventionRouter;
use crate::convention::RouteMeta;
use crate::error::ConventionError;
use crate::state::AppState;

fn profiles(template: &str, name: &str) -> RouteMeta {
    RouteMeta::new(template).named(name).tagged("profiles")
}

/// Registers the profile endpoints and the route listing on `router`.
pub fn api_routes(
    router: ConventionRouter<AppState>,
) -> Result<ConventionRouter<AppState>, ConventionError> {
    router
        .route_with(
            profiles("/Api/UserProfiles", LIST_PROFILES),
            get(list_profiles_handler).post(create_profile_handler),
        )?
        .route_with(
            profiles("/Api/UserProfiles/Search", "SearchUserProfiles"),
            get(search_profiles_handler),
        )?
        .route_with(
            profiles("/Api/UserProfiles/{UserId:int}", GET_PROFILE),
            get(get_profile_handler),
        )?
        .route_with(
            profiles("/Api/UserProfiles/ByName/{DisplayName}", GET_PROFILE_BY_NAME),
            get(get_profile_by_name_handler),
        )?
        .route_with(
            profiles("/Api/UserProfiles/{UserId:int}/Links", "GetUserProfileLinks"),
            get(profile_links_handler),
        )?
        .route_with(
            profiles(
                "/Api/UserProfiles/{UserId:int}/Activity/{**Path?}",
                PROFILE_ACTIVITY,
            ),
            get(profile_activity_handler),
        )?
        .route_with(
            RouteMeta::new("/Api/Routes").named("ListRoutes").tagged("ops"),
            get(routes_handler),
        )
}
