#![allow(dead_code)]

use axum_test::TestServer;
use naming_convention::convention::ConventionOptions;
use naming_convention::routes::app_service;
use naming_convention::state::AppState;
use naming_convention::store::ProfileStore;

pub fn create_test_state(options: ConventionOptions) -> AppState {
    AppState::new(options, ProfileStore::seeded())
}

/// Server over the full application router with seeded profiles.
pub fn make_server(options: ConventionOptions) -> TestServer {
    let app = app_service(create_test_state(options)).unwrap();
    TestServer::new(app).unwrap()
}

pub fn default_server() -> TestServer {
    make_server(ConventionOptions::default())
}
