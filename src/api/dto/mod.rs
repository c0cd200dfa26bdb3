//! Data Transfer Objects for API responses.
//!
//! Field names are written in snake case; the JSON casing middleware renames
//! them on the way out.

pub mod health;
pub mod profiles;
pub mod routes;
