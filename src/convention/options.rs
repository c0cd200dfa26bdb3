//! Settings that drive the naming convention across routing, links and
//! query extraction.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use validator::{Validate, ValidationError};

use super::filter::RouteMeta;
use crate::casing::CasingStyle;
use crate::error::ConventionError;

/// Decides whether an outbound token is transformed.
pub type TokenHook = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Decides whether a route template is transformed.
pub type RouteHook = Arc<dyn Fn(&RouteMeta) -> bool + Send + Sync>;

/// Exclusion entries: anything without whitespace.
static EXCLUSION_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+$").unwrap());

#[allow(clippy::ptr_arg)]
fn validate_entries(entries: &Vec<String>) -> Result<(), ValidationError> {
    for entry in entries {
        if !EXCLUSION_ENTRY_REGEX.is_match(entry) {
            let mut error = ValidationError::new("exclusion_entry");
            error.message = Some(format!("invalid exclusion entry '{entry}'").into());
            return Err(error);
        }
    }
    Ok(())
}

/// Naming convention settings.
///
/// Hooks are optional; an absent hook means "always proceed".
#[derive(Clone, Validate)]
pub struct ConventionOptions {
    /// Style for route segments, parameter names, outbound tokens and query keys.
    pub casing: CasingStyle,

    /// Style for JSON property names in responses. `None` leaves bodies alone.
    pub json_casing: Option<CasingStyle>,

    pub transform_parameter_names: bool,
    pub transform_outbound: bool,
    pub transform_query_keys: bool,

    /// Globs over the raw route template.
    #[validate(custom(function = "validate_entries"))]
    pub excluded_routes: Vec<String>,

    /// Route names, compared case-insensitively.
    #[validate(custom(function = "validate_entries"))]
    pub excluded_names: Vec<String>,

    /// Globs over route tags.
    #[validate(custom(function = "validate_entries"))]
    pub excluded_tags: Vec<String>,

    pub should_transform_route: Option<RouteHook>,
    pub should_transform_outbound: Option<TokenHook>,
}

impl Default for ConventionOptions {
    fn default() -> Self {
        Self {
            casing: CasingStyle::Kebab,
            json_casing: Some(CasingStyle::Camel),
            transform_parameter_names: false,
            transform_outbound: true,
            transform_query_keys: true,
            excluded_routes: Vec::new(),
            excluded_names: Vec::new(),
            excluded_tags: Vec::new(),
            should_transform_route: None,
            should_transform_outbound: None,
        }
    }
}

impl ConventionOptions {
    pub fn new(casing: CasingStyle) -> Self {
        Self {
            casing,
            ..Self::default()
        }
    }

    pub fn with_json_casing(mut self, style: Option<CasingStyle>) -> Self {
        self.json_casing = style;
        self
    }

    pub fn with_parameter_names(mut self, enabled: bool) -> Self {
        self.transform_parameter_names = enabled;
        self
    }

    pub fn with_outbound(mut self, enabled: bool) -> Self {
        self.transform_outbound = enabled;
        self
    }

    pub fn with_query_keys(mut self, enabled: bool) -> Self {
        self.transform_query_keys = enabled;
        self
    }

    pub fn exclude_route(mut self, pattern: impl Into<String>) -> Self {
        self.excluded_routes.push(pattern.into());
        self
    }

    pub fn exclude_name(mut self, name: impl Into<String>) -> Self {
        self.excluded_names.push(name.into());
        self
    }

    pub fn exclude_tag(mut self, pattern: impl Into<String>) -> Self {
        self.excluded_tags.push(pattern.into());
        self
    }

    pub fn with_route_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&RouteMeta) -> bool + Send + Sync + 'static,
    {
        self.should_transform_route = Some(Arc::new(hook));
        self
    }

    pub fn with_outbound_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.should_transform_outbound = Some(Arc::new(hook));
        self
    }

    /// Runs field validation and returns the options unchanged on success.
    ///
    /// # Errors
    ///
    /// [`ConventionError::InvalidArgument`] naming the offending entries.
    pub fn validated(self) -> Result<Self, ConventionError> {
        self.validate()
            .map_err(|e| ConventionError::InvalidArgument(e.to_string()))?;
        Ok(self)
    }
}

impl std::fmt::Debug for ConventionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConventionOptions")
            .field("casing", &self.casing)
            .field("json_casing", &self.json_casing)
            .field("transform_parameter_names", &self.transform_parameter_names)
            .field("transform_outbound", &self.transform_outbound)
            .field("transform_query_keys", &self.transform_query_keys)
            .field("excluded_routes", &self.excluded_routes)
            .field("excluded_names", &self.excluded_names)
            .field("excluded_tags", &self.excluded_tags)
            .field("should_transform_route", &self.should_transform_route.is_some())
            .field(
                "should_transform_outbound",
                &self.should_transform_outbound.is_some(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConventionOptions::default();
        assert_eq!(options.casing, CasingStyle::Kebab);
        assert_eq!(options.json_casing, Some(CasingStyle::Camel));
        assert!(!options.transform_parameter_names);
        assert!(options.transform_outbound);
        assert!(options.transform_query_keys);
        assert!(options.should_transform_route.is_none());
    }

    #[test]
    fn test_builder() {
        let options = ConventionOptions::new(CasingStyle::Snake)
            .with_parameter_names(true)
            .exclude_route("/legacy/**")
            .exclude_name("Ping")
            .with_outbound_hook(|token| token.len() > 1);

        assert_eq!(options.casing, CasingStyle::Snake);
        assert!(options.transform_parameter_names);
        assert_eq!(options.excluded_routes, vec!["/legacy/**"]);
        let hook = options.should_transform_outbound.as_ref().unwrap();
        assert!(!hook("a"));
        assert!(hook("ab"));
    }

    #[test]
    fn test_validation_rejects_blank_entries() {
        let err = ConventionOptions::default()
            .exclude_route("/ok/**")
            .exclude_tag("   ")
            .validated()
            .unwrap_err();
        assert!(matches!(err, ConventionError::InvalidArgument(_)));
        assert!(err.to_string().contains("excluded_tags"));
    }

    #[test]
    fn test_validation_accepts_defaults() {
        assert!(ConventionOptions::default().validated().is_ok());
    }

    #[test]
    fn test_debug_hides_hooks() {
        let options = ConventionOptions::default().with_route_hook(|_| true);
        let debug = format!("{options:?}");
        assert!(debug.contains("should_transform_route: true"));
    }
}
