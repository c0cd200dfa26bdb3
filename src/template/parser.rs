//! Route template parsing.
//!
//! Templates are `/`-separated segments. A segment is either literal text or
//! exactly one `{...}` parameter expression:
//!
//! ```text
//! {name}            required parameter
//! {name?}           optional parameter
//! {*name} {**name}  catch-all parameters
//! {name:int}        constraint (kept verbatim, never interpreted)
//! {name:int?}       optional marker after the constraint
//! {id:regex(^\d{3}$)}  constraints may nest balanced braces
//! ```
//!
//! The scanner tracks brace depth instead of pattern matching, so `/` and
//! `{}` inside a constraint never split a segment.

use std::fmt;

use crate::error::ConventionError;

/// Catch-all prefix of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatchAll {
    /// `{*path}`
    Single,
    /// `{**path}`
    Double,
}

impl CatchAll {
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Single => "*",
            Self::Double => "**",
        }
    }
}

/// Where the optional `?` marker was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalMarker {
    /// `{id?}` or `{id?:int}`
    AfterName,
    /// `{id:int?}`
    AfterConstraint,
}

/// A `{...}` parameter expression with its markers stripped from the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteParameter {
    pub name: String,
    /// Constraint text without its leading `:`; empty when absent.
    pub constraint: String,
    pub catch_all: Option<CatchAll>,
    pub optional: Option<OptionalMarker>,
}

impl RouteParameter {
    pub fn is_catch_all(&self) -> bool {
        self.catch_all.is_some()
    }

    pub fn is_optional(&self) -> bool {
        self.optional.is_some()
    }

    /// Writes the expression back out using `name` in place of the parsed name.
    ///
    /// Markers and constraint are re-emitted exactly where they were parsed.
    pub fn write_with_name(&self, out: &mut String, name: &str) {
        out.push('{');
        if let Some(catch_all) = self.catch_all {
            out.push_str(catch_all.marker());
        }
        out.push_str(name);
        if self.optional == Some(OptionalMarker::AfterName) {
            out.push('?');
        }
        if !self.constraint.is_empty() {
            out.push(':');
            out.push_str(&self.constraint);
        }
        if self.optional == Some(OptionalMarker::AfterConstraint) {
            out.push('?');
        }
        out.push('}');
    }
}

impl fmt::Display for RouteParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.name.len() + self.constraint.len() + 6);
        self.write_with_name(&mut out, &self.name);
        f.write_str(&out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteSegment {
    Literal(String),
    Parameter(RouteParameter),
}

impl fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Parameter(parameter) => fmt::Display::fmt(parameter, f),
        }
    }
}

/// A parsed template together with the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedRouteTemplate {
    raw: String,
    segments: Vec<RouteSegment>,
}

impl ParsedRouteTemplate {
    /// The template exactly as given to [`parse`].
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn parameters(&self) -> impl Iterator<Item = &RouteParameter> {
        self.segments.iter().filter_map(|segment| match segment {
            RouteSegment::Parameter(parameter) => Some(parameter),
            RouteSegment::Literal(_) => None,
        })
    }

    pub fn parameter(&self, name: &str) -> Option<&RouteParameter> {
        self.parameters().find(|parameter| parameter.name == name)
    }
}

/// Rebuilds the canonical text: one leading `/`, segments joined by `/`.
impl fmt::Display for ParsedRouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Parses a route template.
///
/// Empty segments (`//`, a trailing `/`) are dropped.
///
/// # Errors
///
/// Returns [`ConventionError::MalformedTemplate`] when braces are unbalanced,
/// a parameter shares its segment with literal text, or a parameter name is
/// not `[A-Za-z_][A-Za-z0-9_-]*`.
///
/// # Examples
///
/// ```
/// use naming_convention::template::parse;
///
/// let parsed = parse("/Api/{UserId:int}/{**Path?}").unwrap();
/// let names: Vec<&str> = parsed.parameters().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["UserId", "Path"]);
/// assert!(parse("/Api/{id").is_err());
/// ```
pub fn parse(template: &str) -> Result<ParsedRouteTemplate, ConventionError> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut segment_start = 0;

    // Structural characters are ASCII, so every index below is a char boundary.
    for (index, byte) in template.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' if depth == 0 => {
                return Err(ConventionError::malformed(
                    template,
                    format!("unmatched '}}' at position {index}"),
                ));
            }
            b'}' => depth -= 1,
            b'/' if depth == 0 => {
                segments.extend(parse_segment(template, &template[segment_start..index])?);
                segment_start = index + 1;
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ConventionError::malformed(template, "unclosed '{'"));
    }
    segments.extend(parse_segment(template, &template[segment_start..])?);

    Ok(ParsedRouteTemplate {
        raw: template.to_string(),
        segments,
    })
}

fn parse_segment(template: &str, text: &str) -> Result<Option<RouteSegment>, ConventionError> {
    if text.is_empty() {
        return Ok(None);
    }
    if !text.contains('{') {
        return Ok(Some(RouteSegment::Literal(text.to_string())));
    }

    // The segment is balanced; find where its first brace closes.
    let mut depth = 0usize;
    let mut close = None;
    for (index, byte) in text.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(index);
                    break;
                }
            }
            _ => {}
        }
    }

    match close {
        Some(close) if text.starts_with('{') && close == text.len() - 1 => {
            parse_parameter(template, &text[1..close]).map(|p| Some(RouteSegment::Parameter(p)))
        }
        _ => Err(ConventionError::malformed(
            template,
            format!("parameter must span the whole segment in '{text}'"),
        )),
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Whether `name` is a valid parameter name: `[A-Za-z_][A-Za-z0-9_-]*`.
pub fn is_valid_name(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && name.chars().all(is_name_char)
}

fn parse_parameter(template: &str, inner: &str) -> Result<RouteParameter, ConventionError> {
    let (catch_all, rest) = if let Some(rest) = inner.strip_prefix("**") {
        (Some(CatchAll::Double), rest)
    } else if let Some(rest) = inner.strip_prefix('*') {
        (Some(CatchAll::Single), rest)
    } else {
        (None, inner)
    };

    let name_end = rest.find(|ch: char| !is_name_char(ch)).unwrap_or(rest.len());
    let (name, mut tail) = rest.split_at(name_end);

    if !is_valid_name(name) {
        return Err(ConventionError::malformed(
            template,
            format!("invalid parameter name in '{{{inner}}}'"),
        ));
    }

    let mut optional = None;
    if let Some(after) = tail.strip_prefix('?') {
        optional = Some(OptionalMarker::AfterName);
        tail = after;
    }

    let constraint = if tail.is_empty() {
        ""
    } else if let Some(constraint) = tail.strip_prefix(':') {
        let constraint = match constraint.strip_suffix('?') {
            Some(stripped) if optional.is_none() => {
                optional = Some(OptionalMarker::AfterConstraint);
                stripped
            }
            _ => constraint,
        };
        if constraint.is_empty() {
            return Err(ConventionError::malformed(
                template,
                format!("empty constraint in '{{{inner}}}'"),
            ));
        }
        constraint
    } else {
        return Err(ConventionError::malformed(
            template,
            format!("invalid parameter name in '{{{inner}}}'"),
        ));
    };

    Ok(RouteParameter {
        name: name.to_string(),
        constraint: constraint.to_string(),
        catch_all,
        optional,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter(text: &str) -> RouteParameter {
        let parsed = parse(text).unwrap();
        parsed.parameters().next().unwrap().clone()
    }

    #[test]
    fn test_literals_and_parameters() {
        let parsed = parse("/Api/{UserId:int}/Orders").unwrap();
        assert_eq!(parsed.raw(), "/Api/{UserId:int}/Orders");
        assert_eq!(parsed.segments().len(), 3);
        assert_eq!(parsed.segments()[0], RouteSegment::Literal("Api".into()));
        assert_eq!(
            parsed.segments()[1],
            RouteSegment::Parameter(RouteParameter {
                name: "UserId".into(),
                constraint: "int".into(),
                catch_all: None,
                optional: None,
            })
        );
    }

    #[test]
    fn test_catch_all_markers() {
        let single = parameter("/{*rest}");
        assert_eq!(single.catch_all, Some(CatchAll::Single));
        assert_eq!(single.name, "rest");

        let double = parameter("/{**Path?}");
        assert_eq!(double.catch_all, Some(CatchAll::Double));
        assert!(double.is_optional());
        assert_eq!(double.name, "Path");
    }

    #[test]
    fn test_optional_marker_positions() {
        assert_eq!(parameter("/{id?}").optional, Some(OptionalMarker::AfterName));
        assert_eq!(parameter("/{id?:int}").optional, Some(OptionalMarker::AfterName));

        let after = parameter("/{id:int?}");
        assert_eq!(after.optional, Some(OptionalMarker::AfterConstraint));
        assert_eq!(after.constraint, "int");
    }

    #[test]
    fn test_constraint_with_nested_braces_and_slashes() {
        let p = parameter(r"/{code:regex(^[a-z]{3}/\d+$)}");
        assert_eq!(p.name, "code");
        assert_eq!(p.constraint, r"regex(^[a-z]{3}/\d+$)");

        let p = parameter(r"/{id:regex(^\d+$)}");
        assert_eq!(p.constraint, r"regex(^\d+$)");
    }

    #[test]
    fn test_chained_constraints_kept_verbatim() {
        assert_eq!(parameter("/{age:int:min(18)}").constraint, "int:min(18)");
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(matches!(
            parse("/Api/{id"),
            Err(ConventionError::MalformedTemplate { .. })
        ));
        assert!(parse("/Api/id}").is_err());
        assert!(parse("/{a:regex({)}").is_err());
    }

    #[test]
    fn test_invalid_names() {
        for template in ["/{}", "/{1st}", "/{user.id}", "/{*}", "/{id:}", "/{na me}"] {
            assert!(
                matches!(parse(template), Err(ConventionError::MalformedTemplate { .. })),
                "{template}"
            );
        }
    }

    #[test]
    fn test_name_charset() {
        assert_eq!(parameter("/{_private-id_2}").name, "_private-id_2");
        assert!(is_valid_name("_2fa"));
        assert!(!is_valid_name("2-fa"));
        assert!(!is_valid_name("user.id"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_mixed_segment_rejected() {
        assert!(parse("/files/{name}.json").is_err());
        assert!(parse("/files/v{version}").is_err());
    }

    #[test]
    fn test_empty_segments_dropped() {
        let parsed = parse("api//users/").unwrap();
        assert_eq!(parsed.segments().len(), 2);
        assert_eq!(parsed.to_string(), "/api/users");
        assert!(parse("").unwrap().segments().is_empty());
        assert_eq!(parse("/").unwrap().to_string(), "/");
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let template = "/Api/{UserId:int}/{**Path?}";
        assert_eq!(parse(template).unwrap(), parse(template).unwrap());
    }

    #[test]
    fn test_display_reproduces_markers() {
        for template in ["/{id?:int}", "/{id:int?}", "/{**slug}", "/{*slug:alpha}", "/a/{b}/c"] {
            assert_eq!(parse(template).unwrap().to_string(), template);
        }
    }

    #[test]
    fn test_parameter_lookup() {
        let parsed = parse("/users/{id}/posts/{postId?}").unwrap();
        assert!(parsed.parameter("postId").unwrap().is_optional());
        assert!(parsed.parameter("missing").is_none());
    }
}
