mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_routes_served_in_kebab_case() {
    let server = common::default_server();

    let response = server.get("/api/user-profiles").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let profiles = json["data"].as_array().unwrap();
    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0]["displayName"], "Ada Lovelace");
    assert!(profiles[0].get("emailAddress").is_some());
    assert!(profiles[0].get("display_name").is_none());
}

#[tokio::test]
async fn test_declared_pascal_case_path_not_served() {
    let server = common::default_server();

    let response = server.get("/Api/UserProfiles").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/Api/UserProfiles");
}

#[tokio::test]
async fn test_get_profile() {
    let server = common::default_server();

    let response = server.get("/api/user-profiles/2").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["userId"], 2);
    assert_eq!(json["data"]["displayName"], "Alan Turing");
}

#[tokio::test]
async fn test_get_profile_not_found() {
    let server = common::default_server();

    let response = server.get("/api/user-profiles/99").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Profile not found");
    assert_eq!(json["error"]["details"]["userId"], 99);
}

#[tokio::test]
async fn test_create_profile_accepts_any_key_casing() {
    let server = common::default_server();

    let response = server
        .post("/api/user-profiles")
        .json(&json!({
            "DisplayName": "Edsger Dijkstra",
            "email-address": "edsger@example.com"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Profile created");
    assert_eq!(json["data"]["profile"]["userId"], 4);
    assert_eq!(json["data"]["profile"]["displayName"], "Edsger Dijkstra");
    assert_eq!(json["data"]["location"], "/api/user-profiles/4");

    server.get("/api/user-profiles/4").await.assert_status_ok();
}

#[tokio::test]
async fn test_create_profile_validation() {
    let server = common::default_server();

    let response = server
        .post("/api/user-profiles")
        .json(&json!({ "displayName": "", "emailAddress": "nope" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_activity_with_and_without_catch_all() {
    let server = common::default_server();

    let response = server.get("/api/user-profiles/1/activity").await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(json["data"]["activityPath"].is_null());
    assert_eq!(json["data"]["profileLink"], "/api/user-profiles/1");

    let response = server.get("/api/user-profiles/1/activity/logins/2024").await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["activityPath"], "logins/2024");
}

#[tokio::test]
async fn test_generated_links_follow_convention() {
    let server = common::default_server();

    let response = server.get("/api/user-profiles/1/links").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["selfLink"], "/api/user-profiles/1");
    assert_eq!(
        json["data"]["byNameLink"],
        "/api/user-profiles/by-name/ada-lovelace"
    );
    assert_eq!(json["data"]["activityLink"], "/api/user-profiles/1/activity");

    let by_name = json["data"]["byNameLink"].as_str().unwrap().to_string();
    let response = server.get(&by_name).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["userId"], 1);
}

#[tokio::test]
async fn test_route_listing() {
    let server = common::default_server();

    let response = server.get("/api/routes").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let routes = json["data"].as_array().unwrap();
    let activity = routes
        .iter()
        .find(|route| route["name"] == "GetUserActivity")
        .unwrap();
    assert_eq!(
        activity["originalTemplate"],
        "/Api/UserProfiles/{UserId:int}/Activity/{**Path?}"
    );
    assert_eq!(
        activity["transformedTemplate"],
        "/api/user-profiles/{UserId:int}/activity/{**Path?}"
    );
    assert_eq!(
        activity["axumPaths"],
        json!([
            "/api/user-profiles/{UserId}/activity",
            "/api/user-profiles/{UserId}/activity/{*Path}"
        ])
    );
    assert!(activity["excludedBy"].is_null());
}
