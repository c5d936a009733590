use crate::sql::{keyword::Keyword, token::Token};
use itertools::Itertools as _;

/// Coarse SQL word splitter.
///
/// Behavior:
/// - Splits on runs of whitespace.
/// - `(`, `)`, `,` and `;` always come out as standalone one-character words,
///   even when glued to neighbours (`f(a,b);` -> `f` `(` `a` `,` `b` `)` `;`).
/// - Everything else, quotes and operators included, stays inside the word it
///   was typed in. No classification, case untouched.
///
/// Guarantees:
/// - Never panics on any UTF-8 input.
/// - Returned slices borrow from `sql`.
///
/// Complexity:
/// - O(n) time, O(w) space where `w` is number of words.
pub fn split_words(sql: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in sql.char_indices() {
        let structural = Token::punctuation(c).is_some();
        if c.is_whitespace() || structural {
            if let Some(s) = start.take() {
                out.push(&sql[s..i]);
            }
            if structural {
                out.push(&sql[i..i + c.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push(&sql[s..]);
    }

    out
}

/// Fuse coarse words into merged tokens.
///
/// At each position the longest keyword phrase wins: the 3-word window is
/// tried first, then the 2-word window, then the single word. A phrase match
/// emits one `Token::Keyword` and consumes all of its words. A single word is
/// a keyword if it is a one-word phrase, structural punctuation if it is one
/// of `( ) , ;`, and otherwise a `Token::Word` with its original casing.
pub fn merge(words: &[&str]) -> Vec<Token> {
    let mut out = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        let matched = (2..=Keyword::MAX_WORDS).rev().find_map(|len| {
            let window = words.get(i..i + len)?;
            let phrase = window.iter().map(|w| w.to_uppercase()).join(" ");
            Keyword::from_phrase(&phrase).map(|kw| (kw, len))
        });
        if let Some((kw, len)) = matched {
            out.push(Token::Keyword(kw));
            i += len;
            continue;
        }

        out.push(single(words[i]));
        i += 1;
    }

    out
}

fn single(word: &str) -> Token {
    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(punct) = Token::punctuation(c) {
            return punct;
        }
    }
    Keyword::from_phrase(&word.to_uppercase())
        .map(Token::Keyword)
        .unwrap_or_else(|| Token::Word(word.to_string()))
}

/// Split and merge in one go; the token stream both the formatter and the
/// checker consume.
pub fn tokenize(sql: &str) -> Vec<Token> {
    merge(&split_words(sql))
}
