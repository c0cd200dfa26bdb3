//! Resolving differently-cased keys (query strings, form fields) against the
//! keys actually present.

use std::borrow::Cow;

use crate::casing::CaseConverter;

/// Converts each `.`-separated part of `key` on its own, so nesting survives
/// conversion (`filter.startDate` → `filter.start-date`).
pub fn convert_dotted<'a>(converter: &dyn CaseConverter, key: &'a str) -> Cow<'a, str> {
    if !key.contains('.') {
        return converter.convert(key);
    }

    let mut changed = false;
    let parts: Vec<Cow<'a, str>> = key
        .split('.')
        .map(|part| {
            let converted = converter.convert(part);
            changed |= matches!(converted, Cow::Owned(_));
            converted
        })
        .collect();

    if changed {
        Cow::Owned(parts.join("."))
    } else {
        Cow::Borrowed(key)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
    }
}

/// Whether `real_key` names `target`, comparing case-insensitively both as
/// written and after running it through the same converter.
fn key_matches(converter: &dyn CaseConverter, real_key: &str, target: &str) -> bool {
    eq_ignore_case(real_key, target) || eq_ignore_case(&convert_dotted(converter, real_key), target)
}

/// Finds the real key that `requested_key` refers to.
///
/// The requested key is converted with `converter` and compared against
/// every real key. If nothing matches, the part before the first `.` is
/// dropped and the remainder is tried, which supports one level of nesting
/// (`filter.startDate` resolves to a real `StartDate`). Returns the real key
/// as spelled in `real_keys`.
///
/// # Examples
///
/// ```
/// use naming_convention::casing::KebabCase;
/// use naming_convention::convention::resolve;
///
/// let keys = ["StartDate", "page"];
/// assert_eq!(resolve(keys, "filter.startDate", &KebabCase), Some("StartDate"));
/// assert_eq!(resolve(keys, "Page", &KebabCase), Some("page"));
/// assert_eq!(resolve(keys, "endDate", &KebabCase), None);
/// ```
pub fn resolve<'k, I>(
    real_keys: I,
    requested_key: &str,
    converter: &dyn CaseConverter,
) -> Option<&'k str>
where
    I: IntoIterator<Item = &'k str>,
{
    let candidate = convert_dotted(converter, requested_key);
    let remainder = candidate
        .split_once('.')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty());

    let mut nested_match = None;
    for real_key in real_keys {
        if key_matches(converter, real_key, &candidate) {
            return Some(real_key);
        }
        if nested_match.is_none()
            && let Some(rest) = remainder
            && key_matches(converter, real_key, rest)
        {
            nested_match = Some(real_key);
        }
    }

    nested_match
}
