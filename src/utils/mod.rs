//! Utility helpers shared across the crate.
//!
//! - [`glob`] - glob patterns for route exclusion lists

pub mod glob;
