//! Route templates: parsing and convention-driven renaming.
//!
//! - [`parser`] - brace-aware scanner producing [`ParsedRouteTemplate`]
//! - [`transformer`] - re-renders a parsed template in a [`crate::casing::CasingStyle`]

pub mod parser;
pub mod transformer;

pub use parser::{
    CatchAll, OptionalMarker, ParsedRouteTemplate, RouteParameter, RouteSegment, is_valid_name,
    parse,
};
pub use transformer::{transform, transform_with};
