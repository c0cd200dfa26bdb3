mod common;

use axum::http::StatusCode;
use naming_convention::casing::CasingStyle;
use naming_convention::convention::ConventionOptions;
use serde_json::Value;

#[tokio::test]
async fn test_search_with_kebab_keys() {
    let server = common::default_server();

    let response = server
        .get("/api/user-profiles/search")
        .add_query_param("display-name", "turing")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["displayName"], "Alan Turing");
}

#[tokio::test]
async fn test_search_keys_in_other_casings() {
    let server = common::default_server();

    let response = server
        .get("/api/user-profiles/search")
        .add_query_param("DisplayName", "a")
        .add_query_param("page_size", "1")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["pageSize"], 1);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_invalid_page_size() {
    let server = common::default_server();

    let response = server
        .get("/api/user-profiles/search")
        .add_query_param("page-size", "many")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["parameter"], "pageSize");
    assert_eq!(json["error"]["details"]["value"], "many");
}

#[tokio::test]
async fn test_plain_lookup_when_query_keys_disabled() {
    let server = common::make_server(ConventionOptions::new(CasingStyle::Kebab).with_query_keys(false));

    let response = server
        .get("/api/user-profiles/search")
        .add_query_param("display-name", "turing")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["total"], 3);

    let response = server
        .get("/api/user-profiles/search")
        .add_query_param("DISPLAYNAME", "turing")
        .await;
    assert_eq!(response.json::<Value>()["data"]["total"], 1);
}
