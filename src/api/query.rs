//! Query string extraction that tolerates differently-cased keys.

use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use serde_json::json;

use crate::casing::CasingStyle;
use crate::convention::{ConventionOptions, resolve};
use crate::error::AppError;

/// Query parameters looked up by convention-aware key.
///
/// With kebab casing, a handler asking for `pageSize` finds `page-size`,
/// `PageSize` or `page_size` in the request, whichever was sent.
#[derive(Debug, Clone)]
pub struct ConventionQuery {
    pairs: Vec<(String, String)>,
    casing: CasingStyle,
    transform_keys: bool,
}

impl ConventionQuery {
    pub fn from_query(query: &str, casing: CasingStyle, transform_keys: bool) -> Self {
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self {
            pairs,
            casing,
            transform_keys,
        }
    }

    fn resolve_key(&self, key: &str) -> Option<&str> {
        let keys = self.pairs.iter().map(|(k, _)| k.as_str());
        if self.transform_keys {
            resolve(keys, key, &self.casing)
        } else {
            keys.into_iter().find(|k| k.eq_ignore_ascii_case(key))
        }
    }

    /// The first value sent under the key `key` refers to.
    pub fn get(&self, key: &str) -> Option<&str> {
        let real_key = self.resolve_key(key)?;
        self.pairs
            .iter()
            .find(|(k, _)| k == real_key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value sent under the key `key` refers to.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        let Some(real_key) = self.resolve_key(key) else {
            return Vec::new();
        };
        self.pairs
            .iter()
            .filter(|(k, _)| k == real_key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Parses the value of `key`, if present.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] when the value does not parse as `T`.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, AppError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        raw.parse::<T>().map(Some).map_err(|e| {
            AppError::bad_request(
                format!("Invalid value for query parameter '{key}'"),
                json!({ "parameter": key, "value": raw, "reason": e.to_string() }),
            )
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<S> FromRequestParts<S> for ConventionQuery
where
    Arc<ConventionOptions>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let options = Arc::<ConventionOptions>::from_ref(state);
        let query = parts.uri.query().unwrap_or_default();
        Ok(Self::from_query(
            query,
            options.casing,
            options.transform_query_keys,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kebab(query: &str) -> ConventionQuery {
        ConventionQuery::from_query(query, CasingStyle::Kebab, true)
    }

    #[test]
    fn test_get_finds_converted_key() {
        let query = kebab("page-size=20&display-name=Ada%20L");
        assert_eq!(query.get("pageSize"), Some("20"));
        assert_eq!(query.get("DisplayName"), Some("Ada L"));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn test_get_finds_differently_cased_request_key() {
        let query = kebab("PageSize=5");
        assert_eq!(query.get("page_size"), Some("5"));
    }

    #[test]
    fn test_nested_key_resolves_to_flat_parameter() {
        let query = kebab("start-date=2024-01-01");
        assert_eq!(query.get("filter.startDate"), Some("2024-01-01"));
    }

    #[test]
    fn test_plain_lookup_when_disabled() {
        let query = ConventionQuery::from_query("page-size=5&Sort=asc", CasingStyle::Kebab, false);
        assert_eq!(query.get("pageSize"), None);
        assert_eq!(query.get("sort"), Some("asc"));
    }

    #[test]
    fn test_get_all() {
        let query = kebab("tag=a&tag=b&other=c");
        assert_eq!(query.get_all("Tag"), ["a", "b"]);
        assert!(query.get_all("none").is_empty());
    }

    #[test]
    fn test_get_parsed() {
        let query = kebab("page-size=20&min-age=old");
        assert_eq!(query.get_parsed::<u32>("pageSize").unwrap(), Some(20));
        assert_eq!(query.get_parsed::<u32>("absent").unwrap(), None);

        let err = query.get_parsed::<u32>("minAge").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
