use derive_more::Display;
use std::borrow::Cow;

/// Lexical category of a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Category {
    #[display("whitespace")]
    Whitespace,
    #[display("line-comment")]
    LineComment,
    #[display("block-comment")]
    BlockComment,
    /// Single, double or backtick quoted text.
    #[display("string-literal")]
    StringLiteral,
    /// `?`, `:name`, `@name` or `$name`.
    #[display("parameter-placeholder")]
    Parameter,
    #[display("number")]
    Number,
    #[display("operator")]
    Operator,
    #[display("punctuation")]
    Punctuation,
    /// Also used for runs of input no rule matches.
    #[display("identifier")]
    Identifier,
    #[display("keyword")]
    Keyword,
}

impl Category {
    /// Style tag the highlighting renderer configures for this category.
    /// Both comment kinds share one tag.
    pub const fn style_tag(self) -> &'static str {
        match self {
            Category::Whitespace => "ws",
            Category::LineComment | Category::BlockComment => "comment",
            Category::StringLiteral => "string",
            Category::Parameter => "param",
            Category::Number => "number",
            Category::Operator => "op",
            Category::Punctuation => "punct",
            Category::Identifier => "ident",
            Category::Keyword => "keyword",
        }
    }
}

/// A classified slice of the input.
///
/// Invariants:
/// - `text` is exactly `input[start..start + text.len()]`; it is never
///   normalised, keywords included.
/// - Consecutive tokens are contiguous and together cover the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken<'a> {
    pub category: Category,
    pub text: &'a str,
    pub start: usize,
}

impl<'a> ClassifiedToken<'a> {
    pub const fn new(category: Category, text: &'a str, start: usize) -> Self {
        Self {
            category,
            text,
            start,
        }
    }

    /// Exclusive end byte offset.
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end())
    }

    /// Text to render: keywords uppercased, everything else as typed.
    pub fn display(&self) -> Cow<'a, str> {
        match self.category {
            Category::Keyword => Cow::Owned(self.text.to_ascii_uppercase()),
            _ => Cow::Borrowed(self.text),
        }
    }

    /// True for a quoted string or block comment that ran to the end of the
    /// input without its closing delimiter.
    pub fn is_unterminated(&self) -> bool {
        match self.category {
            Category::BlockComment => self.text.len() < 4 || !self.text.ends_with("*/"),
            Category::StringLiteral => match self.text.chars().next() {
                Some(quote) => !closes_quote(self.text, quote),
                None => false,
            },
            _ => false,
        }
    }
}

/// Walk a quoted lexeme, treating a doubled quote as an escaped one, and
/// report whether a lone quote ends it.
fn closes_quote(text: &str, quote: char) -> bool {
    let mut chars = text.chars().skip(1).peekable();
    while let Some(c) = chars.next() {
        if c != quote {
            continue;
        }
        if chars.peek() == Some(&quote) {
            chars.next();
        } else {
            return chars.peek().is_none();
        }
    }
    false
}
