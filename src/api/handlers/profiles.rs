//! Handlers for the user profile endpoints.
//!
//! Routes are declared in PascalCase (`/Api/UserProfiles/{UserId:int}`) and
//! served in the configured casing, so path parameters are read by position
//! rather than by name.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::profiles::{ActivityResponse, ProfileLinks, SearchResponse};
use crate::api::envelope::ApiResponse;
use crate::api::json_case::convert_keys;
use crate::api::query::ConventionQuery;
use crate::api::routing::RouteTable;
use crate::casing::{CaseConverter, SnakeCase};
use crate::error::AppError;
use crate::state::AppState;
use crate::store::{NewProfile, Profile};

pub const LIST_PROFILES: &str = "ListUserProfiles";
pub const GET_PROFILE: &str = "GetUserProfile";
pub const GET_PROFILE_BY_NAME: &str = "GetUserProfileByName";
pub const PROFILE_ACTIVITY: &str = "GetUserActivity";

const DEFAULT_PAGE_SIZE: usize = 20;
const MAX_PAGE_SIZE: usize = 100;

fn profile_not_found(user_id: impl Into<Value>) -> AppError {
    AppError::not_found("Profile not found", json!({ "user_id": user_id.into() }))
}

/// `GET /api/user-profiles`
pub async fn list_profiles_handler(State(state): State<AppState>) -> ApiResponse<Vec<Profile>> {
    ApiResponse::ok(state.profiles.list().await)
}

/// `GET /api/user-profiles/{UserId}`
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<ApiResponse<Profile>, AppError> {
    let profile = state
        .profiles
        .get(user_id)
        .await
        .ok_or_else(|| profile_not_found(user_id))?;
    Ok(ApiResponse::ok(profile))
}

/// `GET /api/user-profiles/by-name/{DisplayName}`
///
/// Matches the segment against each display name rendered in the configured
/// casing, which is how [`profile_links_handler`] generates it.
pub async fn get_profile_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiResponse<Profile>, AppError> {
    let casing = state.options.casing;
    let profile = state
        .profiles
        .find(|profile| {
            profile.display_name.eq_ignore_ascii_case(&name)
                || casing.convert(&profile.display_name).eq_ignore_ascii_case(&name)
        })
        .await
        .ok_or_else(|| profile_not_found(name.as_str()))?;
    Ok(ApiResponse::ok(profile))
}

/// `POST /api/user-profiles`
///
/// Accepts property names in any casing (`displayName`, `DisplayName`,
/// `display-name`).
pub async fn create_profile_handler(
    State(state): State<AppState>,
    Extension(links): Extension<RouteTable>,
    Json(body): Json<Value>,
) -> Result<ApiResponse<Value>, AppError> {
    let new: NewProfile = serde_json::from_value(convert_keys(body, &SnakeCase)).map_err(|e| {
        AppError::bad_request("Invalid profile payload", json!({ "reason": e.to_string() }))
    })?;
    new.validate().map_err(|e| {
        AppError::bad_request("Profile validation failed", json!({ "fields": e.to_string() }))
    })?;

    let profile = state.profiles.create(new).await;
    tracing::info!(user_id = profile.user_id, "Profile created");

    let location = links.url_for(
        GET_PROFILE,
        &[("UserId", profile.user_id.to_string().as_str())],
    );
    Ok(ApiResponse::created(json!({ "profile": profile, "location": location }))
        .with_message("Profile created"))
}

/// `GET /api/user-profiles/search?display-name=..&page-size=..`
///
/// Query keys are resolved by convention, so `displayName`, `DisplayName`
/// and `display_name` are all accepted.
pub async fn search_profiles_handler(
    State(state): State<AppState>,
    query: ConventionQuery,
) -> Result<ApiResponse<SearchResponse>, AppError> {
    let page_size = query
        .get_parsed::<usize>("pageSize")?
        .unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(AppError::bad_request(
            format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
            json!({ "page_size": page_size }),
        ));
    }

    let needle = query.get("displayName").map(str::to_lowercase);
    let matches: Vec<Profile> = state
        .profiles
        .list()
        .await
        .into_iter()
        .filter(|profile| {
            needle
                .as_deref()
                .is_none_or(|needle| profile.display_name.to_lowercase().contains(needle))
        })
        .collect();

    let total = matches.len();
    let items = matches.into_iter().take(page_size).collect();
    Ok(ApiResponse::ok(SearchResponse {
        items,
        total,
        page_size,
    }))
}

/// `GET /api/user-profiles/{UserId}/activity/{*Path}`
///
/// The catch-all is optional, so the route is also served without it.
pub async fn profile_activity_handler(
    State(state): State<AppState>,
    Extension(links): Extension<RouteTable>,
    Path(params): Path<Vec<(String, String)>>,
) -> Result<ApiResponse<ActivityResponse>, AppError> {
    let raw_id = params.first().map(|(_, value)| value.as_str()).unwrap_or_default();
    let user_id: u64 = raw_id.parse().map_err(|_| {
        AppError::bad_request("User id must be an integer", json!({ "user_id": raw_id }))
    })?;

    if state.profiles.get(user_id).await.is_none() {
        return Err(profile_not_found(user_id));
    }

    let activity_path = params.get(1).map(|(_, value)| value.clone());
    let profile_link = links.url_for(GET_PROFILE, &[("UserId", user_id.to_string().as_str())]);

    Ok(ApiResponse::ok(ActivityResponse {
        user_id,
        activity_path,
        profile_link,
    }))
}

/// `GET /api/user-profiles/{UserId}/links`
pub async fn profile_links_handler(
    State(state): State<AppState>,
    Extension(links): Extension<RouteTable>,
    Path(user_id): Path<u64>,
) -> Result<ApiResponse<ProfileLinks>, AppError> {
    let profile = state
        .profiles
        .get(user_id)
        .await
        .ok_or_else(|| profile_not_found(user_id))?;

    let id = user_id.to_string();
    Ok(ApiResponse::ok(ProfileLinks {
        user_id,
        self_link: links.url_for(GET_PROFILE, &[("UserId", id.as_str())]),
        by_name_link: links.url_for(
            GET_PROFILE_BY_NAME,
            &[("DisplayName", profile.display_name.as_str())],
        ),
        activity_link: links.url_for(PROFILE_ACTIVITY, &[("UserId", id.as_str())]),
    }))
}
