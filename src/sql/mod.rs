//! Coarse SQL tokenization and compound-keyword merging.
//!
//! This module produces the token stream the formatter and the checker share.
//! It is deliberately coarse: words are split on whitespace and on the four
//! structural characters `( ) , ;`, nothing else is classified. For
//! highlighting-grade lexing see the `highlight` module.
//!
//! Modules:
//! - `keyword`    : The keyword phrase table and its clause/start/list predicates.
//! - `token`      : Merged token enum (keyword, punctuation, plain word).
//! - `tokenizer`  : `split_words` (coarse pass), `merge` (longest-match keyword
//!   fusion) and `tokenize` (both).
//! - `statements` : Quote-aware script splitter for collaborators that run
//!   statements one at a time.
//!
//! Example:
//! ```rust
//! use sqltidy::prelude::*;
//!
//! let tokens = tokenize("select a from t group by a;");
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::GroupBy)));
//! assert_eq!(tokens.last(), Some(&Token::Semicolon));
//! ```
//!
//! NOTE: This is **not** a SQL parser. Quotes are not understood here, so a
//! comma inside a string literal still splits a word.

pub mod keyword;
pub mod statements;
pub mod token;
pub mod tokenizer;

pub use keyword::Keyword;
pub use statements::split_statements;
pub use token::Token;
pub use tokenizer::{merge, split_words, tokenize};

/// Convenience prelude re‑exporting the most commonly used items.
///
/// Import with:
/// `use sqltidy::prelude::*;`
pub mod prelude {
    pub use super::{Keyword, Token, split_statements, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_stream_through_prelude() {
        use super::prelude::*;
        let toks = tokenize("create table t(id int primary key);");
        assert_eq!(
            toks,
            [
                Token::Keyword(Keyword::CreateTable),
                Token::Word("t".into()),
                Token::ParenOpen,
                Token::Word("id".into()),
                Token::Word("int".into()),
                Token::Keyword(Keyword::PrimaryKey),
                Token::ParenClose,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn statements_and_tokens_agree_on_boundaries() {
        let script = "drop table if exists t; select 1;";
        let semicolons = tokenize(script)
            .iter()
            .filter(|t| **t == Token::Semicolon)
            .count();
        assert_eq!(split_statements(script).len(), semicolons);
    }
}
