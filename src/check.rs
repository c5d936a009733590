//! Structural checks over the merged token stream.
//!
//! Three independent checks, all accumulated:
//! 1. the script starts with a valid statement keyword,
//! 2. parentheses balance,
//! 3. the script ends with `;`.
//!
//! Findings are returned as [`Diagnostic`]s and never affect formatting.
crate::reexport!(diagnostic);

use crate::*;

/// Which statements have their opening keyword validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementScope {
    /// Only the first token of the script. Later statements are not looked at.
    #[default]
    FirstStatement,
    /// The first token of the script and the first token after every `;`.
    /// Empty statements (`;;`) are skipped.
    EveryStatement,
}

/// Run all checks over `tokens`.
pub fn check_tokens(tokens: &[Token], scope: StatementScope) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    check_starts(tokens, scope, &mut out);
    check_parentheses(tokens, &mut out);
    if tokens.last().is_some_and(|t| *t != Token::Semicolon) {
        out.push(Diagnostic::MissingTrailingSemicolon);
    }
    out
}

fn check_starts(tokens: &[Token], scope: StatementScope, out: &mut Vec<Diagnostic>) {
    let Some(first) = tokens.first() else {
        return;
    };
    let later = tokens
        .windows(2)
        .filter(|pair| pair[0] == Token::Semicolon && pair[1] != Token::Semicolon)
        .map(|pair| &pair[1]);
    let limit = match scope {
        StatementScope::FirstStatement => 1,
        StatementScope::EveryStatement => usize::MAX,
    };
    for token in std::iter::once(first).chain(later).take(limit) {
        if !token.is_statement_start() {
            debug!(%token, "statement does not start with a valid keyword");
            out.push(Diagnostic::InvalidStatementStart {
                token: token.to_string(),
            });
        }
    }
}

fn check_parentheses(tokens: &[Token], out: &mut Vec<Diagnostic>) {
    let mut balance: i64 = 0;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::ParenOpen => balance += 1,
            Token::ParenClose => {
                balance -= 1;
                if balance < 0 {
                    out.push(Diagnostic::UnbalancedParentheses(Imbalance::UnmatchedClose {
                        index,
                    }));
                    break;
                }
            }
            _ => {}
        }
    }
    if balance != 0 {
        out.push(Diagnostic::UnbalancedParentheses(Imbalance::NotBalanced));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn check(sql: &str) -> Vec<String> {
        check_tokens(&tokenize(sql), StatementScope::FirstStatement)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[rstest]
    #[case("")]
    #[case("SELECT 1;")]
    #[case("select * from t where id in (1, (2));")]
    #[case("begin; commit;")]
    #[case("rollback;")]
    #[case("Truncate Table t;")]
    fn clean_scripts(#[case] sql: &str) {
        assert!(check(sql).is_empty(), "{sql} -> {:?}", check(sql));
    }

    #[rstest]
    #[case("foo bar;", &["SQL must start with a keyword, got 'foo'."])]
    #[case("insert t values (1);", &["SQL must start with a keyword, got 'insert'."])]
    #[case("FROM t;", &["SQL must start with a keyword, got 'FROM'."])]
    #[case("CREATE TABLE t (id INT;", &["Parentheses are not balanced."])]
    #[case("SELECT 1", &["SQL should end with ';'."])]
    #[case(
        "SELECT 1) (;",
        &["Unmatched ')' at token 2.", "Parentheses are not balanced."]
    )]
    #[case(
        ") x",
        &[
            "SQL must start with a keyword, got ')'.",
            "Unmatched ')' at token 0.",
            "Parentheses are not balanced.",
            "SQL should end with ';'.",
        ]
    )]
    fn reports_diagnostics_in_order(#[case] sql: &str, #[case] expected: &[&str]) {
        assert_eq!(check(sql), expected);
    }

    #[test]
    fn index_refers_to_merged_tokens() {
        // GROUP BY is one token, so the stray `)` sits at index 4, not 5.
        let diagnostics = check_tokens(&tokenize("SELECT a GROUP BY a ) ;"), StatementScope::default());
        assert_eq!(
            diagnostics[0],
            Diagnostic::UnbalancedParentheses(Imbalance::UnmatchedClose { index: 4 })
        );
    }

    #[test]
    fn only_first_statement_start_is_checked_by_default() {
        assert!(check("SELECT 1; foo;").is_empty());
    }

    #[rstest]
    #[case("SELECT 1; foo; bar;", &["foo", "bar"])]
    #[case("SELECT 1;; SELECT 2;", &[])]
    #[case("oops; SELECT 1;", &["oops"])]
    fn every_statement_scope_checks_each_start(#[case] sql: &str, #[case] offenders: &[&str]) {
        let actual: Vec<_> = check_tokens(&tokenize(sql), StatementScope::EveryStatement)
            .into_iter()
            .filter_map(|d| match d {
                Diagnostic::InvalidStatementStart { token } => Some(token),
                _ => None,
            })
            .collect();
        assert_eq!(actual, offenders);
    }
}
