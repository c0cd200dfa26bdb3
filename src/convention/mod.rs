//! Applying the naming convention outside of templates.
//!
//! - [`options`] - [`ConventionOptions`] and hook types
//! - [`filter`] - route exclusion rules
//! - [`outbound`] - casing for generated link values
//! - [`key_lookup`] - resolving differently-cased keys

pub mod filter;
pub mod key_lookup;
pub mod options;
pub mod outbound;

pub use filter::{Exclusion, RouteFilter, RouteMeta};
pub use key_lookup::{convert_dotted, resolve};
pub use options::{ConventionOptions, RouteHook, TokenHook};
pub use outbound::{OutboundTransformer, transform_outbound, transform_outbound_with};
