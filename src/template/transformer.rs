//! Applies a naming style to a parsed route template.

use std::borrow::Cow;

use super::parser::{ParsedRouteTemplate, RouteSegment, is_valid_name};
use crate::casing::{CaseConverter, CasingStyle};

/// Renames a parsed template into `style`.
///
/// Literal segments always pass through the converter; parameter names only
/// when `transform_parameter_names` is set. Constraints and markers are kept
/// verbatim. When the rebuilt template equals [`ParsedRouteTemplate::raw`],
/// the raw text is returned borrowed.
///
/// # Examples
///
/// ```
/// use naming_convention::casing::CasingStyle;
/// use naming_convention::template::{parse, transform};
///
/// let parsed = parse("/Api/{UserId:int}/{**Path?}").unwrap();
/// assert_eq!(
///     transform(&parsed, CasingStyle::Kebab, true),
///     "/api/{user-id:int}/{**path?}"
/// );
/// ```
pub fn transform(
    parsed: &ParsedRouteTemplate,
    style: CasingStyle,
    transform_parameter_names: bool,
) -> Cow<'_, str> {
    transform_with(parsed, style.converter(), transform_parameter_names)
}

/// [`transform`] with an arbitrary converter.
pub fn transform_with<'a>(
    parsed: &'a ParsedRouteTemplate,
    converter: &dyn CaseConverter,
    transform_parameter_names: bool,
) -> Cow<'a, str> {
    let mut out = String::with_capacity(parsed.raw().len() + 1);

    for segment in parsed.segments() {
        out.push('/');
        match segment {
            RouteSegment::Literal(text) => out.push_str(&convert_literal(converter, text)),
            RouteSegment::Parameter(parameter) => {
                let name = if transform_parameter_names {
                    converter.convert(&parameter.name)
                } else {
                    Cow::Borrowed(parameter.name.as_str())
                };
                // Keep the declared name when conversion empties it or breaks
                // the name grammar (`_2fa` would become `2-fa`).
                let name = if !is_valid_name(&name) {
                    Cow::Borrowed(parameter.name.as_str())
                } else {
                    name
                };
                parameter.write_with_name(&mut out, &name);
            }
        }
    }

    if out.is_empty() {
        out.push('/');
    }

    if out == parsed.raw() {
        Cow::Borrowed(parsed.raw())
    } else {
        Cow::Owned(out)
    }
}

/// Converts the word part of a literal, keeping leading and trailing
/// punctuation (`**Path?` → `**path?`).
fn convert_literal<'a>(converter: &dyn CaseConverter, text: &'a str) -> Cow<'a, str> {
    let is_word_char = |ch: char| ch.is_alphanumeric();
    let (Some(start), Some(last)) = (text.find(is_word_char), text.rfind(is_word_char)) else {
        return Cow::Borrowed(text);
    };
    let end = last + text[last..].chars().next().map_or(1, char::len_utf8);

    match converter.convert(&text[start..end]) {
        Cow::Borrowed(_) => Cow::Borrowed(text),
        Cow::Owned(core) => {
            let mut literal = String::with_capacity(text.len() + core.len());
            literal.push_str(&text[..start]);
            literal.push_str(&core);
            literal.push_str(&text[end..]);
            Cow::Owned(literal)
        }
    }
}
