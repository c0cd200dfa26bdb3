//! Registering axum routes under the naming convention and generating links
//! back to them.
//!
//! Routes are declared with templates in whatever style the code uses
//! (`/Api/UserProfiles/{UserId:int}`); [`ConventionRouter`] rewrites them
//! into the configured style before handing them to axum:
//!
//! ```rust,ignore
//! let (router, links) = ConventionRouter::new(options)?
//!     .route_with(
//!         RouteMeta::new("/Api/UserProfiles/{UserId:int}").named("GetUserProfile"),
//!         get(get_profile),
//!     )?
//!     .into_parts();
//!
//! // GET /api/user-profiles/{UserId}
//! let link = links.url_for("GetUserProfile", &[("UserId", "42")]);
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

use axum::{Router, routing::MethodRouter};
use url::Url;

use crate::convention::{
    ConventionOptions, Exclusion, OutboundTransformer, RouteFilter, RouteMeta, resolve,
};
use crate::error::ConventionError;
use crate::template::{ParsedRouteTemplate, RouteSegment, parse, transform};

/// A route as it ended up in the router.
#[derive(Debug, Clone)]
pub struct RegisteredRoute {
    pub name: Option<String>,
    pub tags: Vec<String>,
    /// Template as declared.
    pub original: String,
    /// Template after the convention was applied; equal to `original` when excluded.
    pub transformed: String,
    /// Paths handed to axum, longest last.
    pub axum_paths: Vec<String>,
    pub excluded: Option<Exclusion>,
    parsed: ParsedRouteTemplate,
}

impl RegisteredRoute {
    pub fn is_excluded(&self) -> bool {
        self.excluded.is_some()
    }
}

/// Renders axum path syntax. Every optional parameter contributes a variant
/// that stops just before it.
fn axum_paths(parsed: &ParsedRouteTemplate) -> Vec<String> {
    let mut paths = Vec::new();
    let mut current = String::new();

    for segment in parsed.segments() {
        match segment {
            RouteSegment::Literal(text) => {
                current.push('/');
                current.push_str(text);
            }
            RouteSegment::Parameter(parameter) => {
                if parameter.is_optional() {
                    paths.push(if current.is_empty() {
                        "/".to_string()
                    } else {
                        current.clone()
                    });
                }
                current.push_str(if parameter.is_catch_all() { "/{*" } else { "/{" });
                current.push_str(&parameter.name);
                current.push('}');
            }
        }
    }

    paths.push(if current.is_empty() {
        "/".to_string()
    } else {
        current
    });

    let mut seen = HashSet::new();
    paths.retain(|path| seen.insert(path.clone()));
    paths
}

/// First catch-all parameter followed by another segment; axum only accepts
/// them at the end of a path.
fn misplaced_catch_all(parsed: &ParsedRouteTemplate) -> Option<&str> {
    let segments = parsed.segments();
    segments
        .iter()
        .take(segments.len().saturating_sub(1))
        .find_map(|segment| match segment {
            RouteSegment::Parameter(parameter) if parameter.is_catch_all() => {
                Some(parameter.name.as_str())
            }
            _ => None,
        })
}

/// Wraps an [`axum::Router`] and applies [`ConventionOptions`] to every
/// route registered through it.
pub struct ConventionRouter<S = ()> {
    router: Router<S>,
    options: Arc<ConventionOptions>,
    filter: RouteFilter,
    routes: Vec<RegisteredRoute>,
    paths: HashSet<String>,
}

impl<S> ConventionRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// # Errors
    ///
    /// [`ConventionError::InvalidArgument`] if an exclusion pattern is invalid.
    pub fn new(options: Arc<ConventionOptions>) -> Result<Self, ConventionError> {
        let filter = RouteFilter::from_options(&options)?;
        Ok(Self {
            router: Router::new(),
            options,
            filter,
            routes: Vec::new(),
            paths: HashSet::new(),
        })
    }

    pub fn route(
        self,
        template: &str,
        method_router: MethodRouter<S>,
    ) -> Result<Self, ConventionError> {
        self.route_with(RouteMeta::new(template), method_router)
    }

    /// Registers `method_router` under the transformed form of `meta.template`.
    ///
    /// # Errors
    ///
    /// - [`ConventionError::MalformedTemplate`] if the template does not parse
    /// - [`ConventionError::InvalidArgument`] if the resulting path is already
    ///   registered or a catch-all parameter is not the last segment
    pub fn route_with(
        mut self,
        meta: RouteMeta,
        method_router: MethodRouter<S>,
    ) -> Result<Self, ConventionError> {
        let original = parse(&meta.template)?;
        let excluded = self.filter.exclusion(&meta);

        let parsed = match &excluded {
            Some(reason) => {
                tracing::debug!(
                    template = %meta.template,
                    %reason,
                    "Route excluded from naming convention"
                );
                original
            }
            None => {
                let rewritten = match transform(
                    &original,
                    self.options.casing,
                    self.options.transform_parameter_names,
                ) {
                    Cow::Borrowed(_) => None,
                    Cow::Owned(text) => Some(text),
                };
                match rewritten {
                    Some(text) => parse(&text)?,
                    None => original,
                }
            }
        };

        if let Some(catch_all) = misplaced_catch_all(&parsed) {
            return Err(ConventionError::InvalidArgument(format!(
                "catch-all parameter '{catch_all}' in '{}' must be the last segment",
                meta.template
            )));
        }

        let paths = axum_paths(&parsed);
        if let Some(duplicate) = paths.iter().find(|path| self.paths.contains(*path)) {
            return Err(ConventionError::InvalidArgument(format!(
                "route '{duplicate}' (from '{}') is already registered",
                meta.template
            )));
        }

        for path in &paths {
            self.router = self.router.route(path, method_router.clone());
            self.paths.insert(path.clone());
        }

        let transformed = if excluded.is_some() {
            meta.template.clone()
        } else {
            parsed.to_string()
        };

        if excluded.is_none() {
            tracing::info!(
                original = %meta.template,
                transformed = %transformed,
                name = meta.name.as_deref().unwrap_or("-"),
                "Registered route"
            );
        }

        self.routes.push(RegisteredRoute {
            name: meta.name,
            tags: meta.tags,
            original: meta.template,
            transformed,
            axum_paths: paths,
            excluded,
            parsed,
        });
        Ok(self)
    }

    pub fn routes(&self) -> &[RegisteredRoute] {
        &self.routes
    }

    /// Splits into the axum router and the table used for link generation.
    pub fn into_parts(self) -> (Router<S>, RouteTable) {
        let outbound = OutboundTransformer::new(
            self.options.casing,
            self.options.transform_outbound,
            self.options.should_transform_outbound.clone(),
        );
        let table = RouteTable {
            routes: self.routes.into(),
            outbound,
            options: self.options,
        };
        (self.router, table)
    }

}

/// Registered routes, shared with handlers for generating links.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Arc<[RegisteredRoute]>,
    outbound: OutboundTransformer,
    options: Arc<ConventionOptions>,
}

impl RouteTable {
    pub fn routes(&self) -> &[RegisteredRoute] {
        &self.routes
    }

    /// Looks a route up by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&RegisteredRoute> {
        self.routes.iter().find(|route| {
            route
                .name
                .as_deref()
                .is_some_and(|route_name| route_name.eq_ignore_ascii_case(name))
        })
    }

    /// Builds the path of the route called `name`.
    ///
    /// `values` are keyed by parameter name in any casing. Each value is
    /// passed through the outbound transformation and percent-encoded; a
    /// catch-all value is split on `/` first. Generation stops at the first
    /// optional parameter without a value.
    ///
    /// Returns `None` for an unknown route or a missing required value.
    pub fn url_for(&self, name: &str, values: &[(&str, &str)]) -> Option<String> {
        let route = self.get(name)?;
        let converter = self.options.casing;

        let mut url = Url::parse("http://localhost/").ok()?;
        {
            let mut path = url.path_segments_mut().ok()?;
            path.clear();

            for segment in route.parsed.segments() {
                match segment {
                    RouteSegment::Literal(text) => {
                        path.push(text);
                    }
                    RouteSegment::Parameter(parameter) => {
                        let keys = values.iter().map(|(key, _)| *key);
                        let value = resolve(keys, &parameter.name, &converter)
                            .and_then(|key| values.iter().find(|(k, _)| *k == key))
                            .map(|(_, value)| *value);

                        match value {
                            Some(value) if parameter.is_catch_all() => {
                                for part in value.split('/').filter(|part| !part.is_empty()) {
                                    path.push(&self.outbound.transform(part));
                                }
                            }
                            Some(value) => {
                                path.push(&self.outbound.transform(value));
                            }
                            None if parameter.is_optional() => break,
                            None => return None,
                        }
                    }
                }
            }
        }

        Some(url.path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casing::CasingStyle;
    use axum::routing::get;

    fn table(options: ConventionOptions, templates: &[(&str, &str)]) -> RouteTable {
        let mut router = ConventionRouter::<()>::new(Arc::new(options)).unwrap();
        for (name, template) in templates {
            router = router
                .route_with(RouteMeta::new(*template).named(*name), get(|| async { "ok" }))
                .unwrap();
        }
        router.into_parts().1
    }

    #[test]
    fn test_axum_paths_for_optional_catch_all() {
        let parsed = parse("/api/users/{UserId:int}/activity/{**Path?}").unwrap();
        assert_eq!(
            axum_paths(&parsed),
            [
                "/api/users/{UserId}/activity",
                "/api/users/{UserId}/activity/{*Path}"
            ]
        );
    }

    #[test]
    fn test_axum_paths_root_and_leading_optional() {
        assert_eq!(axum_paths(&parse("/").unwrap()), ["/"]);
        assert_eq!(axum_paths(&parse("/{Page?}").unwrap()), ["/", "/{Page}"]);
    }

    #[test]
    fn test_routes_are_transformed() {
        let t = table(
            ConventionOptions::new(CasingStyle::Kebab),
            &[("Profile", "/Api/UserProfiles/{UserId:int}")],
        );
        let route = t.get("profile").unwrap();
        assert_eq!(route.transformed, "/api/user-profiles/{UserId:int}");
        assert_eq!(route.axum_paths, ["/api/user-profiles/{UserId}"]);
        assert!(!route.is_excluded());
    }

    #[test]
    fn test_parameter_names_transformed_when_enabled() {
        let t = table(
            ConventionOptions::new(CasingStyle::Snake).with_parameter_names(true),
            &[("Profile", "/Api/UserProfiles/{UserId:int}")],
        );
        assert_eq!(t.get("Profile").unwrap().axum_paths, ["/api/user_profiles/{user_id}"]);
    }

    #[test]
    fn test_excluded_route_keeps_declared_form() {
        let t = table(
            ConventionOptions::new(CasingStyle::Kebab).exclude_route("/Legacy/**"),
            &[("Old", "/Legacy/OrderList")],
        );
        let route = t.get("Old").unwrap();
        assert_eq!(route.transformed, "/Legacy/OrderList");
        assert_eq!(route.axum_paths, ["/Legacy/OrderList"]);
        assert_eq!(route.excluded, Some(Exclusion::Route("/Legacy/**".into())));
    }

    #[test]
    fn test_malformed_template_fails_registration() {
        let router = ConventionRouter::<()>::new(Arc::new(ConventionOptions::default())).unwrap();
        let err = router.route("/Api/{Id", get(|| async { "" })).err().unwrap();
        assert!(matches!(err, ConventionError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_catch_all_must_be_last() {
        let router = ConventionRouter::<()>::new(Arc::new(ConventionOptions::default())).unwrap();
        let err = router
            .route("/Files/{*Rest}/Edit", get(|| async { "" }))
            .err()
            .unwrap();
        assert!(matches!(err, ConventionError::InvalidArgument(_)));
        assert!(err.to_string().contains("Rest"));

        let router = ConventionRouter::<()>::new(Arc::new(ConventionOptions::default())).unwrap();
        assert!(router.route("/Files/{*Rest}", get(|| async { "" })).is_ok());
    }

    #[test]
    fn test_parameter_name_invalid_after_conversion_registers() {
        let t = table(
            ConventionOptions::new(CasingStyle::Kebab).with_parameter_names(true),
            &[("TwoFactor", "/Api/{_2fa}")],
        );
        let route = t.get("TwoFactor").unwrap();
        assert_eq!(route.transformed, "/api/{_2fa}");
        assert_eq!(route.axum_paths, ["/api/{_2fa}"]);
        assert_eq!(
            t.url_for("TwoFactor", &[("_2fa", "123")]).as_deref(),
            Some("/api/123")
        );
    }

    #[test]
    fn test_duplicate_after_transformation_rejected() {
        let router = ConventionRouter::<()>::new(Arc::new(ConventionOptions::default()))
            .unwrap()
            .route("/UserProfiles", get(|| async { "" }))
            .unwrap();
        let err = router.route("/user_profiles", get(|| async { "" })).err().unwrap();
        assert!(matches!(err, ConventionError::InvalidArgument(_)));
    }

    #[test]
    fn test_url_for_transforms_values() {
        let t = table(
            ConventionOptions::new(CasingStyle::Kebab),
            &[("ByName", "/Api/UserProfiles/ByName/{DisplayName}")],
        );
        assert_eq!(
            t.url_for("ByName", &[("displayName", "AdaLovelace")]).as_deref(),
            Some("/api/user-profiles/by-name/ada-lovelace")
        );
    }

    #[test]
    fn test_url_for_respects_outbound_flag_and_hook() {
        let disabled = table(
            ConventionOptions::new(CasingStyle::Kebab).with_outbound(false),
            &[("ByName", "/Users/{Name}")],
        );
        assert_eq!(
            disabled.url_for("ByName", &[("Name", "AdaLovelace")]).as_deref(),
            Some("/users/AdaLovelace")
        );

        let hooked = table(
            ConventionOptions::new(CasingStyle::Kebab).with_outbound_hook(|token| token != "KeepMe"),
            &[("ByName", "/Users/{Name}")],
        );
        assert_eq!(
            hooked.url_for("ByName", &[("Name", "KeepMe")]).as_deref(),
            Some("/users/KeepMe")
        );
    }

    #[test]
    fn test_url_for_optional_and_required() {
        let t = table(
            ConventionOptions::new(CasingStyle::Kebab),
            &[("Activity", "/Api/Users/{UserId:int}/Activity/{**Path?}")],
        );
        assert_eq!(
            t.url_for("Activity", &[("UserId", "7")]).as_deref(),
            Some("/api/users/7/activity")
        );
        assert_eq!(
            t.url_for("Activity", &[("UserId", "7"), ("path", "Logins/LastWeek")]).as_deref(),
            Some("/api/users/7/activity/logins/last-week")
        );
        assert_eq!(t.url_for("Activity", &[("path", "x")]), None);
        assert_eq!(t.url_for("Missing", &[]), None);
    }

    #[test]
    fn test_url_for_percent_encodes() {
        let t = table(
            ConventionOptions::new(CasingStyle::Kebab).with_outbound(false),
            &[("Search", "/Search/{Term}")],
        );
        assert_eq!(
            t.url_for("Search", &[("Term", "a b/c")]).as_deref(),
            Some("/search/a%20b%2Fc")
        );
    }
}
