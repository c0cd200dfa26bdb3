//! Deciding which routes take part in the convention.

use std::fmt;

use super::options::{ConventionOptions, RouteHook};
use crate::error::ConventionError;
use crate::utils::glob::Glob;

/// What a router knows about a route when it is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub template: String,
    pub name: Option<String>,
    pub tags: Vec<String>,
}

impl RouteMeta {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Why a route was left as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    Route(String),
    Name(String),
    Tag { pattern: String, tag: String },
    Hook,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::Route(pattern) => write!(f, "route pattern '{pattern}'"),
            Exclusion::Name(name) => write!(f, "route name '{name}'"),
            Exclusion::Tag { pattern, tag } => write!(f, "tag '{tag}' matches '{pattern}'"),
            Exclusion::Hook => f.write_str("route hook"),
        }
    }
}

/// Exclusion lists compiled once, plus the optional route hook.
#[derive(Clone, Default)]
pub struct RouteFilter {
    routes: Vec<Glob>,
    names: Vec<String>,
    tags: Vec<Glob>,
    hook: Option<RouteHook>,
}

impl RouteFilter {
    /// # Errors
    ///
    /// [`ConventionError::InvalidArgument`] if a pattern does not compile.
    pub fn from_options(options: &ConventionOptions) -> Result<Self, ConventionError> {
        let routes = options
            .excluded_routes
            .iter()
            .map(|pattern| Glob::new(pattern))
            .collect::<Result<_, _>>()?;
        let tags = options
            .excluded_tags
            .iter()
            .map(|pattern| Glob::new(pattern))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            routes,
            names: options.excluded_names.clone(),
            tags,
            hook: options.should_transform_route.clone(),
        })
    }

    /// The first rule that excludes `meta`, if any. The hook is consulted last.
    pub fn exclusion(&self, meta: &RouteMeta) -> Option<Exclusion> {
        let template = meta.template.trim();

        if let Some(glob) = self.routes.iter().find(|glob| {
            glob.is_match(template)
                || (!template.starts_with('/') && glob.is_match(&format!("/{template}")))
        }) {
            return Some(Exclusion::Route(glob.pattern().to_string()));
        }

        if let Some(name) = &meta.name
            && self.names.iter().any(|excluded| excluded.eq_ignore_ascii_case(name))
        {
            return Some(Exclusion::Name(name.clone()));
        }

        for tag in &meta.tags {
            if let Some(glob) = self.tags.iter().find(|glob| glob.is_match(tag)) {
                return Some(Exclusion::Tag {
                    pattern: glob.pattern().to_string(),
                    tag: tag.clone(),
                });
            }
        }

        match &self.hook {
            Some(hook) if !hook(meta) => Some(Exclusion::Hook),
            _ => None,
        }
    }

    pub fn is_excluded(&self, meta: &RouteMeta) -> bool {
        self.exclusion(meta).is_some()
    }
}

impl fmt::Debug for RouteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteFilter")
            .field("routes", &self.routes)
            .field("names", &self.names)
            .field("tags", &self.tags)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(options: ConventionOptions) -> RouteFilter {
        RouteFilter::from_options(&options).unwrap()
    }

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let f = RouteFilter::default();
        assert!(!f.is_excluded(&RouteMeta::new("/Api/Users")));
    }

    #[test]
    fn test_route_glob() {
        let f = filter(ConventionOptions::default().exclude_route("/Legacy/**"));
        assert_eq!(
            f.exclusion(&RouteMeta::new("/legacy/Orders/{id}")),
            Some(Exclusion::Route("/Legacy/**".into()))
        );
        assert!(f.is_excluded(&RouteMeta::new("legacy/Orders")));
        assert!(!f.is_excluded(&RouteMeta::new("/Api/Legacy")));
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let f = filter(ConventionOptions::default().exclude_name("HealthCheck"));
        assert!(f.is_excluded(&RouteMeta::new("/Health").named("healthcheck")));
        assert!(!f.is_excluded(&RouteMeta::new("/Health")));
    }

    #[test]
    fn test_tag_glob() {
        let f = filter(ConventionOptions::default().exclude_tag("internal*"));
        let meta = RouteMeta::new("/Ops").tagged("public").tagged("InternalOps");
        assert_eq!(
            f.exclusion(&meta),
            Some(Exclusion::Tag {
                pattern: "internal*".into(),
                tag: "InternalOps".into()
            })
        );
    }

    #[test]
    fn test_hook_consulted_after_lists() {
        let f = filter(
            ConventionOptions::default()
                .exclude_name("Skip")
                .with_route_hook(|meta| !meta.template.contains("Raw")),
        );
        assert_eq!(
            f.exclusion(&RouteMeta::new("/Raw").named("skip")),
            Some(Exclusion::Name("skip".into()))
        );
        assert_eq!(f.exclusion(&RouteMeta::new("/Raw")), Some(Exclusion::Hook));
        assert_eq!(f.exclusion(&RouteMeta::new("/Cooked")), None);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let options = ConventionOptions::default().exclude_route("");
        assert!(RouteFilter::from_options(&options).is_err());
    }
}
