//! Glob patterns for route exclusion lists.
//!
//! Patterns compile to anchored, case-insensitive regular expressions:
//!
//! - `**` - any run of characters, `/` included
//! - `*` - any run of characters within one path segment
//! - `?` - exactly one character other than `/`
//!
//! Everything else matches literally.

use regex::Regex;

use crate::error::ConventionError;

/// A compiled glob pattern.
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    regex: Regex,
}

impl Glob {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConventionError::InvalidArgument`] for an empty or blank pattern.
    pub fn new(pattern: &str) -> Result<Self, ConventionError> {
        if pattern.trim().is_empty() {
            return Err(ConventionError::InvalidArgument(
                "glob pattern must not be empty".to_string(),
            ));
        }

        let mut source = String::with_capacity(pattern.len() * 2 + 6);
        source.push_str("(?i)^");

        let mut chars = pattern.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '*' if chars.peek() == Some(&'*') => {
                    chars.next();
                    source.push_str(".*");
                }
                '*' => source.push_str("[^/]*"),
                '?' => source.push_str("[^/]"),
                _ => source.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|e| {
            ConventionError::InvalidArgument(format!("invalid glob pattern '{pattern}': {e}"))
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
