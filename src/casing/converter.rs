//! The four case converters.
//!
//! Every conversion tokenizes the input once to measure the exact output
//! length, then renders into a stack buffer (outputs up to
//! [`STACK_BUFFER_LEN`] bytes) or straight into a heap `String`. Output that
//! equals the input is returned borrowed, so already-conforming identifiers
//! cost no allocation at all.

use std::borrow::Cow;

use super::tokenizer::Words;
use super::{CaseConverter, CasingStyle};

/// Largest output, in bytes, rendered on the stack before deciding whether
/// to allocate.
pub const STACK_BUFFER_LEN: usize = 256;

/// Receives rendered characters.
trait Sink {
    fn push(&mut self, ch: char);
}

/// Counts bytes without storing them.
struct Measure(usize);

impl Sink for Measure {
    fn push(&mut self, ch: char) {
        self.0 += ch.len_utf8();
    }
}

impl Sink for String {
    fn push(&mut self, ch: char) {
        String::push(self, ch);
    }
}

struct StackBuffer {
    bytes: [u8; STACK_BUFFER_LEN],
    len: usize,
}

impl StackBuffer {
    fn new() -> Self {
        Self {
            bytes: [0; STACK_BUFFER_LEN],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // Only whole chars are ever encoded into the buffer.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl Sink for StackBuffer {
    fn push(&mut self, ch: char) {
        let end = self.len + ch.len_utf8();
        ch.encode_utf8(&mut self.bytes[self.len..end]);
        self.len = end;
    }
}

fn render<S: Sink>(style: CasingStyle, value: &str, sink: &mut S) {
    for (index, range) in Words::new(value).enumerate() {
        if index > 0
            && let Some(separator) = style.separator()
        {
            sink.push(separator);
        }

        let capitalize = match style {
            CasingStyle::Camel => index > 0,
            CasingStyle::Pascal => true,
            CasingStyle::Kebab | CasingStyle::Snake => false,
        };

        let mut chars = range.slice(value).chars();
        if capitalize && let Some(first) = chars.next() {
            first.to_uppercase().for_each(|ch| sink.push(ch));
        }
        chars.flat_map(char::to_lowercase).for_each(|ch| sink.push(ch));
    }
}

/// Converts `value` to `style`.
///
/// Pure and total: blank input yields `""`, and input already in `style`
/// comes back borrowed.
pub fn convert(style: CasingStyle, value: &str) -> Cow<'_, str> {
    if value.trim().is_empty() {
        return Cow::Borrowed("");
    }

    let mut measure = Measure(0);
    render(style, value, &mut measure);

    if measure.0 <= STACK_BUFFER_LEN {
        let mut buffer = StackBuffer::new();
        render(style, value, &mut buffer);
        borrow_if_unchanged(value, buffer.as_str())
    } else {
        let mut output = String::with_capacity(measure.0);
        render(style, value, &mut output);
        if output == value {
            Cow::Borrowed(value)
        } else {
            Cow::Owned(output)
        }
    }
}

fn borrow_if_unchanged<'a>(value: &'a str, rendered: &str) -> Cow<'a, str> {
    if rendered == value {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(rendered.to_owned())
    }
}

macro_rules! converter {
    ($(#[$doc:meta])* $name:ident => $style:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl CaseConverter for $name {
            fn convert<'a>(&self, value: &'a str) -> Cow<'a, str> {
                convert($style, value)
            }
        }
    };
}

converter! {
    /// `fooBarBaz`
    CamelCase => CasingStyle::Camel
}

converter! {
    /// `FooBarBaz`
    PascalCase => CasingStyle::Pascal
}

converter! {
    /// `foo-bar-baz`
    KebabCase => CasingStyle::Kebab
}

converter! {
    /// `foo_bar_baz`
    SnakeCase => CasingStyle::Snake
}
