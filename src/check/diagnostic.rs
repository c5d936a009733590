use derive_more::Display;

/// A non-fatal finding about the checked SQL. `Display` renders the message
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Diagnostic {
    #[display("SQL must start with a keyword, got '{token}'.")]
    InvalidStatementStart { token: String },
    #[display("{_0}")]
    UnbalancedParentheses(Imbalance),
    #[display("SQL should end with ';'.")]
    MissingTrailingSemicolon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Imbalance {
    /// A `)` with no open parenthesis, at this index of the merged token stream.
    #[display("Unmatched ')' at token {index}.")]
    UnmatchedClose { index: usize },
    #[display("Parentheses are not balanced.")]
    NotBalanced,
}
