//! Clause-based pretty printer over merged tokens.
//!
//! One left-to-right pass, no lookahead. Rules, checked in order per token:
//! clause keywords start a new line; commas glue to the previous word and
//! break the line inside list clauses; `(` ends its line and indents what
//! follows; `)` sits alone on a dedented line and ends any list; `;` glues to
//! the previous word and closes the statement with a blank line; `ON`/`TO`
//! end a GRANT/REVOKE privilege list inline; anything else is appended with
//! one space.
crate::reexport!(state);

use crate::*;

/// Spaces per indent unit unless configured otherwise.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Streaming formatter: feed merged tokens, then `finish` for the text.
#[derive(Debug)]
pub struct LineFormatter {
    unit: String,
    state: FormatterState,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

impl LineFormatter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            unit: " ".repeat(indent_width),
            state: FormatterState::default(),
        }
    }

    pub fn feed(&mut self, token: &Token) {
        let state = &mut self.state;
        match token {
            Token::Keyword(kw)
                if kw.is_clause() && !(state.in_grant_priv_list && kw.is_privilege()) =>
            {
                state.flush(&self.unit);
                state.push(kw.as_str());
                if kw.opens_list() {
                    state.inside_list = true;
                }
                state.in_grant_priv_list = kw.opens_privilege_list();
            }
            Token::Comma => {
                if !state.attach_pending(',') && !state.attach_flushed(',', false) {
                    state.push(",");
                }
                // Privilege lists never set `inside_list`, so they stay inline.
                if state.inside_list {
                    state.flush(&self.unit);
                }
            }
            Token::ParenOpen => {
                state.push("(");
                state.flush(&self.unit);
                state.indent_level += 1;
            }
            Token::ParenClose => {
                state.flush(&self.unit);
                state.indent_level = state.indent_level.saturating_sub(1);
                state.push(")");
                state.flush(&self.unit);
                state.inside_list = false;
            }
            Token::Semicolon => {
                if state.attach_pending(';') {
                    state.flush(&self.unit);
                } else if !state.attach_flushed(';', true) {
                    state.push_line(";");
                }
                state.end_statement();
            }
            Token::Keyword(kw) if state.in_grant_priv_list && kw.closes_privilege_list() => {
                state.push(kw.as_str());
                state.in_grant_priv_list = false;
            }
            other => state.push(other.to_string()),
        }
    }

    pub fn finish(mut self) -> String {
        self.state.flush(&self.unit);
        self.state.into_output()
    }
}

/// Format a whole merged token stream.
pub fn format_tokens(tokens: &[Token], indent_width: usize) -> String {
    let mut formatter = LineFormatter::new(indent_width);
    for token in tokens {
        formatter.feed(token);
    }
    let out = formatter.finish();
    trace!(tokens = tokens.len(), lines = out.lines().count(), "formatted token stream");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn fmt(sql: &str) -> String {
        format_tokens(&tokenize(sql), DEFAULT_INDENT_WIDTH)
    }

    #[test]
    fn select_list_breaks_on_commas() {
        assert_eq!(
            fmt("select id,name from t where id=1;"),
            "SELECT id,\nname\nFROM t\nWHERE id=1;"
        );
    }

    #[test]
    fn create_table_indents_definitions() {
        let sql = "CREATE TABLE posts(id INTEGER PRIMARY KEY, title TEXT, body TEXT);";
        assert_eq!(
            fmt(sql),
            indoc! {"
                CREATE TABLE posts (
                    id INTEGER PRIMARY KEY,
                    title TEXT,
                    body TEXT
                );"}
        );
    }

    #[test]
    fn insert_values_lists() {
        let sql = "INSERT INTO posts(id,title,body) VALUES(1,'Hello','World');";
        assert_eq!(
            fmt(sql),
            indoc! {"
                INSERT INTO posts (
                    id,
                    title,
                    body
                )
                VALUES (
                    1,
                    'Hello',
                    'World'
                );"}
        );
    }

    #[test]
    fn grant_privileges_stay_inline() {
        assert_eq!(
            fmt("GRANT SELECT, INSERT ON posts TO bob;"),
            "GRANT SELECT, INSERT ON posts TO bob;"
        );
        assert_eq!(
            fmt("revoke update, delete, all on posts from bob;"),
            "REVOKE UPDATE, DELETE, ALL ON posts\nFROM bob;"
        );
    }

    #[test]
    fn bare_insert_privilege_stays_inline() {
        assert_eq!(
            fmt("grant insert, select on t to u;"),
            "GRANT insert, SELECT ON t TO u;"
        );
    }

    #[test]
    fn privilege_exception_ends_after_on() {
        // Once ON closed the list, SELECT is a clause keyword again.
        assert_eq!(
            fmt("GRANT UPDATE ON t TO u SELECT 1"),
            "GRANT UPDATE ON t TO u\nSELECT 1"
        );
    }

    #[test]
    fn statements_are_separated_and_reset() {
        assert_eq!(
            fmt("DROP TABLE IF EXISTS t; SELECT 1;"),
            "DROP TABLE IF EXISTS t;\n\nSELECT 1;"
        );
        assert_eq!(
            fmt("CREATE TABLE t (a INT; SELECT 1;"),
            indoc! {"
                CREATE TABLE t (
                    a INT;

                SELECT 1;"}
        );
    }

    #[test]
    fn semicolon_after_close_paren_glues_to_it() {
        assert_eq!(fmt("SELECT (1);"), "SELECT (\n    1\n);");
    }

    #[test]
    fn comma_after_close_paren_is_kept() {
        assert_eq!(
            fmt("VALUES (1), (2);"),
            indoc! {"
                VALUES (
                    1
                ),
                (
                    2
                );"}
        );
    }

    #[test]
    fn nested_parens_indent_per_level() {
        assert_eq!(
            fmt("SELECT f(g(x))"),
            indoc! {"
                SELECT f (
                    g (
                        x
                    )
                )"}
        );
    }

    #[test]
    fn unmatched_close_paren_floors_at_zero() {
        assert_eq!(fmt(") x"), ")\nx");
    }

    #[rstest]
    #[case("", "")]
    #[case(";", ";")]
    #[case("SELECT 1;;", "SELECT 1;\n;")]
    #[case(", a", ", a")]
    fn degenerate_input_never_loses_punctuation(#[case] sql: &str, #[case] expected: &str) {
        assert_eq!(fmt(sql), expected);
    }

    #[test]
    fn indent_width_is_configurable() {
        let out = format_tokens(&tokenize("SELECT (1)"), 2);
        assert_eq!(out, "SELECT (\n  1\n)");
    }

    #[rstest]
    #[case("select id,name from t where id=1;")]
    #[case("CREATE TABLE posts(id INTEGER PRIMARY KEY, title TEXT);")]
    #[case("DROP TABLE IF EXISTS t; INSERT INTO t(a,b) VALUES(1,2);")]
    #[case("GRANT SELECT, INSERT ON posts TO bob;")]
    #[case("select a, count(*) from t left join u on t.id=u.id group by a order by a;")]
    fn formatting_is_idempotent(#[case] sql: &str) {
        let once = fmt(sql);
        assert_eq!(fmt(&once), once);
    }
}
