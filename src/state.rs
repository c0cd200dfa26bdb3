use std::sync::Arc;

use axum::extract::FromRef;

use crate::convention::ConventionOptions;
use crate::store::ProfileStore;

#[derive(Clone)]
pub struct AppState {
    pub options: Arc<ConventionOptions>,
    pub profiles: ProfileStore,
}

impl AppState {
    pub fn new(options: ConventionOptions, profiles: ProfileStore) -> Self {
        Self {
            options: Arc::new(options),
            profiles,
        }
    }
}

impl FromRef<AppState> for Arc<ConventionOptions> {
    fn from_ref(state: &AppState) -> Self {
        state.options.clone()
    }
}
