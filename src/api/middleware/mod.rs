//! HTTP middleware.
//!
//! JSON property renaming lives in [`crate::api::json_case`].

pub mod tracing;
