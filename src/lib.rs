//! # Naming Convention
//!
//! Consistent identifier casing for HTTP services built with Axum.
//!
//! ## Architecture
//!
//! - **Casing** ([`casing`]) - Word tokenizer and the camel, Pascal, kebab and snake converters
//! - **Templates** ([`template`]) - Route template parser and transformer
//! - **Convention** ([`convention`]) - Options, route exclusion, outbound tokens, key lookup
//! - **API Layer** ([`api`]) - Convention-aware router, query extractor, JSON casing, envelopes
//!
//! ## Quick Start
//!
//! ```
//! use naming_convention::casing::{CaseConverter, CasingStyle};
//! use naming_convention::template::{parse, transform};
//!
//! assert_eq!(CasingStyle::Snake.convert("UserProfileId"), "user_profile_id");
//!
//! let parsed = parse("/Api/UserProfiles/{UserId:int}").unwrap();
//! assert_eq!(
//!     transform(&parsed, CasingStyle::Kebab, false),
//!     "/api/user-profiles/{UserId:int}"
//! );
//! ```
//!
//! ## Configuration
//!
//! The demo server is configured from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod casing;
pub mod convention;
pub mod error;
pub mod state;
pub mod store;
pub mod template;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, ConventionError};
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::api::envelope::ApiResponse;
    pub use crate::api::query::ConventionQuery;
    pub use crate::api::routing::{ConventionRouter, RegisteredRoute, RouteTable};
    pub use crate::casing::{CaseConverter, CasingStyle};
    pub use crate::convention::{ConventionOptions, RouteMeta};
    pub use crate::error::{AppError, ConventionError};
    pub use crate::template::{ParsedRouteTemplate, parse, transform};
}
