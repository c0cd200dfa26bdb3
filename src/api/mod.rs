//! HTTP layer applying the naming convention to an axum service.
//!
//! # Modules
//!
//! - [`routing`] - [`ConventionRouter`](routing::ConventionRouter) and link generation
//! - [`query`] - convention-aware query string extractor
//! - [`json_case`] - JSON property renaming for responses
//! - [`envelope`] - success and error response envelopes
//! - [`dto`] - response bodies of the demo API
//! - [`handlers`] - demo API handlers
//! - [`middleware`] - request tracing
//! - [`routes`] - demo API route declarations

pub mod dto;
pub mod envelope;
pub mod handlers;
pub mod json_case;
pub mod middleware;
pub mod query;
pub mod routes;
pub mod routing;
