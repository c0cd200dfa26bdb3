//! Identifier casing: tokenizer, styles and converters.
//!
//! - [`tokenizer`] - zero-copy word splitting
//! - [`converter`] - camel, Pascal, kebab and snake renderers
//!
//! Collaborators depend on the [`CaseConverter`] trait and pick an
//! implementation through [`CasingStyle`].

pub mod converter;
pub mod tokenizer;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConventionError;

pub use converter::{CamelCase, KebabCase, PascalCase, STACK_BUFFER_LEN, SnakeCase};
pub use tokenizer::{TokenizedWords, WordRange, Words, tokenize};

/// Converts identifiers into one naming style.
///
/// Implementations must be pure: the same input always produces the same
/// output, and blank input produces `""`. Returning [`Cow::Borrowed`] signals
/// that the input already conforms.
pub trait CaseConverter: Send + Sync {
    fn convert<'a>(&self, value: &'a str) -> Cow<'a, str>;
}

/// Supported naming styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingStyle {
    /// `fooBarBaz`
    Camel,
    /// `FooBarBaz`
    Pascal,
    /// `foo-bar-baz`
    #[default]
    Kebab,
    /// `foo_bar_baz`
    Snake,
}

impl CasingStyle {
    pub const ALL: [CasingStyle; 4] = [Self::Camel, Self::Pascal, Self::Kebab, Self::Snake];

    /// Character placed between words, if the style has one.
    pub const fn separator(self) -> Option<char> {
        match self {
            Self::Kebab => Some('-'),
            Self::Snake => Some('_'),
            Self::Camel | Self::Pascal => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Kebab => "kebab",
            Self::Snake => "snake",
        }
    }

    /// The shared converter instance for this style.
    pub fn converter(self) -> &'static dyn CaseConverter {
        match self {
            Self::Camel => &CamelCase,
            Self::Pascal => &PascalCase,
            Self::Kebab => &KebabCase,
            Self::Snake => &SnakeCase,
        }
    }
}

impl CaseConverter for CasingStyle {
    fn convert<'a>(&self, value: &'a str) -> Cow<'a, str> {
        converter::convert(*self, value)
    }
}

impl fmt::Display for CasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasingStyle {
    type Err = ConventionError;

    /// Accepts `kebab`, `kebab-case`, `kebab_case`, `KebabCase` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.strip_suffix("case").unwrap_or(&key) {
            "camel" => Ok(Self::Camel),
            "pascal" => Ok(Self::Pascal),
            "kebab" => Ok(Self::Kebab),
            "snake" => Ok(Self::Snake),
            _ => Err(ConventionError::InvalidArgument(format!(
                "unknown casing style '{s}', expected camel, pascal, kebab or snake"
            ))),
        }
    }
}
