//! Merged token model shared by the formatter and the checker.
//!
//! A `Token` is what survives coarse splitting and compound-keyword merging:
//! either a recognized keyword phrase, one of the four structural punctuation
//! marks, or an arbitrary word kept exactly as typed.
//!
//! `Display` yields the text the token contributes to formatted output, so
//! keywords render in their canonical uppercase form and words keep their
//! original casing.
use crate::sql::keyword::Keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Recognized keyword phrase, possibly spanning several input words.
    Keyword(Keyword),
    /// Comma `,`.
    Comma,
    /// Opening parenthesis `(`.
    ParenOpen,
    /// Closing parenthesis `)`.
    ParenClose,
    /// Statement terminator `;`.
    Semicolon,
    /// Identifier, literal, operator run or any other word, case preserved.
    Word(String),
}

impl Token {
    /// Punctuation token for a single structural character, if it is one.
    pub const fn punctuation(c: char) -> Option<Self> {
        match c {
            ',' => Some(Token::Comma),
            '(' => Some(Token::ParenOpen),
            ')' => Some(Token::ParenClose),
            ';' => Some(Token::Semicolon),
            _ => None,
        }
    }

    /// Returns the keyword if this token is one.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Token::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == kw)
    }

    /// Returns the raw text if this token is a plain word.
    pub fn word(&self) -> Option<&str> {
        match self {
            Token::Word(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_statement_start(&self) -> bool {
        self.keyword().is_some_and(Keyword::is_statement_start)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Keyword(kw) => f.write_str(kw.as_str()),
            Token::Comma => f.write_str(","),
            Token::ParenOpen => f.write_str("("),
            Token::ParenClose => f.write_str(")"),
            Token::Semicolon => f.write_str(";"),
            Token::Word(w) => f.write_str(w),
        }
    }
}
