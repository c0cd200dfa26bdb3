mod common;

use naming_convention::casing::CasingStyle;
use naming_convention::convention::ConventionOptions;
use serde_json::Value;

#[tokio::test]
async fn test_snake_casing_with_parameter_names() {
    let server = common::make_server(
        ConventionOptions::new(CasingStyle::Snake)
            .with_parameter_names(true)
            .with_json_casing(Some(CasingStyle::Kebab)),
    );

    let response = server.get("/api/user_profiles/1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["user-id"], 1);
    assert_eq!(json["data"]["display-name"], "Ada Lovelace");

    let links = server.get("/api/user_profiles/1/links").await.json::<Value>();
    assert_eq!(links["data"]["self-link"], "/api/user_profiles/1");
    assert_eq!(
        links["data"]["by-name-link"],
        "/api/user_profiles/by_name/ada_lovelace"
    );

    server.get("/api/user-profiles/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_json_casing_disabled() {
    let server = common::make_server(ConventionOptions::default().with_json_casing(None));

    let json = server.get("/api/user-profiles/1").await.json::<Value>();

    assert_eq!(json["data"]["user_id"], 1);
    assert!(json["data"].get("userId").is_none());
}

#[tokio::test]
async fn test_excluded_route_keeps_declared_path() {
    let server = common::make_server(ConventionOptions::default().exclude_name("getuserprofile"));

    server.get("/Api/UserProfiles/1").await.assert_status_ok();
    server.get("/api/user-profiles/1").await.assert_status_not_found();

    let links = server.get("/api/user-profiles/1/links").await.json::<Value>();
    assert_eq!(links["data"]["selfLink"], "/Api/UserProfiles/1");

    let routes = server.get("/api/routes").await.json::<Value>();
    let excluded = routes["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|route| route["name"] == "GetUserProfile")
        .unwrap()
        .clone();
    assert_eq!(excluded["excludedBy"], "route name 'GetUserProfile'");
}

#[tokio::test]
async fn test_route_hook_and_tag_exclusion() {
    let server = common::make_server(
        ConventionOptions::default()
            .exclude_tag("op?")
            .with_route_hook(|meta| !meta.template.contains("Search")),
    );

    server.get("/Api/Routes").await.assert_status_ok();
    server.get("/Api/UserProfiles/Search").await.assert_status_ok();
    server.get("/api/user-profiles").await.assert_status_ok();
}

#[tokio::test]
async fn test_outbound_disabled_keeps_link_values() {
    let server = common::make_server(ConventionOptions::default().with_outbound(false));

    let links = server.get("/api/user-profiles/1/links").await.json::<Value>();

    assert_eq!(
        links["data"]["byNameLink"],
        "/api/user-profiles/by-name/Ada%20Lovelace"
    );
    let response = server
        .get("/api/user-profiles/by-name/Ada%20Lovelace")
        .await;
    response.assert_status_ok();
}

#[test]
fn test_invalid_exclusion_pattern_fails_router_construction() {
    let state = common::create_test_state(ConventionOptions::default().exclude_route(" "));
    assert!(naming_convention::routes::app_service(state).is_err());
}
