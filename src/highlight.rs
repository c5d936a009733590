//! Fine-grained lexing for syntax highlighting.
//!
//! Independent of the formatter's coarse tokens: this re-scans raw text with a
//! single regex of named alternatives and tags every slice with a
//! [`Category`]. The output is lossless, so a renderer can walk the tokens in
//! order and style `start..end` ranges of the original buffer.
//!
//! ```rust
//! use sqltidy::{Category, classify};
//!
//! let tokens = classify("select 'x' -- hi");
//! let tags: Vec<_> = tokens.iter().map(|t| t.category.style_tag()).collect();
//! assert_eq!(tags, ["keyword", "ws", "string", "ws", "comment"]);
//! assert_eq!(tokens[0].display(), "SELECT");
//! ```
crate::reexport!(category);
crate::reexport!(lexer);
crate::reexport!(vocabulary);
