//! Casing for dynamically supplied outbound tokens (generated link values).

use std::borrow::Cow;

use super::options::TokenHook;
use crate::casing::{CaseConverter, CasingStyle};

/// Converts a single outbound token.
///
/// `None` stays `None` and an empty token is passed through untouched.
/// Otherwise `should_transform` is asked first (absent means "always"), and
/// only a `true` answer runs the token through the converter. A panicking
/// predicate unwinds to the caller.
///
/// # Examples
///
/// ```
/// use naming_convention::casing::CasingStyle;
/// use naming_convention::convention::transform_outbound;
///
/// let token = transform_outbound(Some("UserProfiles"), CasingStyle::Kebab, None);
/// assert_eq!(token.as_deref(), Some("user-profiles"));
///
/// let skip = |token: &str| token != "Legacy";
/// let token = transform_outbound(Some("Legacy"), CasingStyle::Kebab, Some(&skip));
/// assert_eq!(token.as_deref(), Some("Legacy"));
/// ```
pub fn transform_outbound<'a>(
    token: Option<&'a str>,
    style: CasingStyle,
    should_transform: Option<&dyn Fn(&str) -> bool>,
) -> Option<Cow<'a, str>> {
    transform_outbound_with(token, style.converter(), should_transform)
}

/// [`transform_outbound`] with an arbitrary converter.
pub fn transform_outbound_with<'a>(
    token: Option<&'a str>,
    converter: &dyn CaseConverter,
    should_transform: Option<&dyn Fn(&str) -> bool>,
) -> Option<Cow<'a, str>> {
    let token = token?;
    if token.is_empty() {
        return Some(Cow::Borrowed(token));
    }

    let proceed = should_transform.is_none_or(|predicate| predicate(token));
    if proceed {
        Some(converter.convert(token))
    } else {
        Some(Cow::Borrowed(token))
    }
}

/// Outbound transformation bound to a style and an optional hook.
#[derive(Clone)]
pub struct OutboundTransformer {
    style: CasingStyle,
    enabled: bool,
    hook: Option<TokenHook>,
}

impl OutboundTransformer {
    pub fn new(style: CasingStyle, enabled: bool, hook: Option<TokenHook>) -> Self {
        Self {
            style,
            enabled,
            hook,
        }
    }

    pub fn transform<'a>(&self, token: &'a str) -> Cow<'a, str> {
        if !self.enabled {
            return Cow::Borrowed(token);
        }

        let hook = self.hook.as_deref().map(|hook| hook as &dyn Fn(&str) -> bool);
        transform_outbound(Some(token), self.style, hook).unwrap_or(Cow::Borrowed(token))
    }
}

impl std::fmt::Debug for OutboundTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutboundTransformer")
            .field("style", &self.style)
            .field("enabled", &self.enabled)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}
