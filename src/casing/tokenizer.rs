//! Word-boundary tokenizer for identifiers.
//!
//! Splits identifiers such as `HTTPServerError`, `item2Name` or `user_id`
//! into words without copying: every word is a [`WordRange`] into the
//! original text.
//!
//! ## Boundary Rules
//!
//! 1. Separators (anything that is not a letter or digit) end the current
//!    word and are dropped. Runs of separators collapse.
//! 2. Lowercase or digit followed by uppercase starts a word: `fooBar` → `foo`, `Bar`
//! 3. An uppercase run followed by lowercase splits before its last letter:
//!    `XMLParser` → `XML`, `Parser`
//! 4. Letters and digits never share a word: `item2Name` → `item`, `2`, `Name`

use std::str::CharIndices;

/// A half-open byte range `[start, start + len)` into the tokenized text.
///
/// Equality compares offsets only, never the characters behind them, so
/// ranges taken from different source strings must not be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordRange {
    pub start: usize,
    pub len: usize,
}

impl WordRange {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns the word this range covers in `text`.
    ///
    /// `text` must be the string the range was produced from.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Separator,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_alphabetic() {
            // Caseless letters (CJK, etc.) behave like lowercase.
            if ch.is_uppercase() {
                Self::Upper
            } else {
                Self::Lower
            }
        } else if ch.is_numeric() {
            Self::Digit
        } else {
            Self::Separator
        }
    }
}

/// Whether `current` opens a new word given its neighbours inside a word.
fn starts_word(previous: CharClass, current: CharClass, following: Option<CharClass>) -> bool {
    use CharClass::{Digit, Lower, Upper};

    match (previous, current) {
        (Lower, Upper) => true,
        (Upper, Upper) => following == Some(Lower),
        (Upper | Lower, Digit) | (Digit, Upper | Lower) => true,
        _ => false,
    }
}

/// Lazy iterator over the words of an identifier.
///
/// Performs no allocation; cloning it is cheap, which lets converters
/// walk the same text twice (measure, then render).
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
        }
    }

    /// The text being tokenized.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl Iterator for Words<'_> {
    type Item = WordRange;

    fn next(&mut self) -> Option<WordRange> {
        let mut start: Option<usize> = None;
        let mut previous = CharClass::Separator;

        loop {
            let mut ahead = self.chars.clone();
            let Some((index, ch)) = ahead.next() else {
                return start.map(|s| WordRange::new(s, self.text.len() - s));
            };
            let class = CharClass::of(ch);

            match start {
                Some(s) => {
                    let following = ahead.clone().next().map(|(_, c)| CharClass::of(c));
                    if class == CharClass::Separator || starts_word(previous, class, following) {
                        // Leave the boundary char unconsumed; it opens the next word.
                        return Some(WordRange::new(s, index - s));
                    }
                }
                None if class != CharClass::Separator => start = Some(index),
                None => {}
            }

            previous = class;
            self.chars = ahead;
        }
    }
}

/// The words of one input string, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedWords<'a> {
    text: &'a str,
    ranges: Vec<WordRange>,
}

impl<'a> TokenizedWords<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn ranges(&self) -> &[WordRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterates the words as string slices of the source text.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.ranges.iter().map(|range| range.slice(self.text))
    }
}

/// Splits `text` into words.
///
/// Never fails: empty or all-separator input yields no words.
///
/// # Examples
///
/// ```
/// use naming_convention::casing::tokenize;
///
/// let words = tokenize("HTTPServer_error2");
/// let parts: Vec<&str> = words.iter().collect();
/// assert_eq!(parts, ["HTTP", "Server", "error", "2"]);
/// ```
pub fn tokenize(text: &str) -> TokenizedWords<'_> {
    TokenizedWords {
        text,
        ranges: Words::new(text).collect(),
    }
}
