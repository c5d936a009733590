use crate::*;
use itertools::Itertools as _;
use regex::Regex;
use std::sync::LazyLock;

/// One named alternative of the master pattern.
struct Rule {
    group: &'static str,
    pattern: &'static str,
    category: Category,
}

/// Alternatives in priority order; the first one that matches at a position
/// wins. Unterminated quotes and block comments run to end of input.
const RULES: &[Rule] = &[
    Rule {
        group: "ws",
        pattern: r"[ \t\r\n\f]+",
        category: Category::Whitespace,
    },
    Rule {
        group: "line_comment",
        pattern: r"--[^\n]*",
        category: Category::LineComment,
    },
    Rule {
        group: "block_comment",
        pattern: r"/\*.*?(?:\*/|\z)",
        category: Category::BlockComment,
    },
    Rule {
        group: "single",
        pattern: r"'(?:''|[^'])*(?:'|\z)",
        category: Category::StringLiteral,
    },
    Rule {
        group: "double",
        pattern: r#""(?:""|[^"])*(?:"|\z)"#,
        category: Category::StringLiteral,
    },
    Rule {
        group: "backtick",
        pattern: r"`(?:``|[^`])*(?:`|\z)",
        category: Category::StringLiteral,
    },
    Rule {
        group: "param",
        pattern: r"\?|[:@$][A-Za-z_][A-Za-z0-9_]*",
        category: Category::Parameter,
    },
    Rule {
        group: "number",
        pattern: r"[0-9]+(?:\.[0-9]+)?|\.[0-9]+",
        category: Category::Number,
    },
    Rule {
        group: "op",
        pattern: r"<>|!=|<=|>=|\|\||[=<>+\-*/%]",
        category: Category::Operator,
    },
    Rule {
        group: "punct",
        pattern: r"[(),.;]",
        category: Category::Punctuation,
    },
    Rule {
        group: "ident",
        pattern: r"[A-Za-z_][A-Za-z0-9_$]*",
        category: Category::Identifier,
    },
];

static MASTER: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = RULES
        .iter()
        .map(|rule| format!("(?P<{}>{})", rule.group, rule.pattern))
        .join("|");
    Regex::new(&format!("(?s){alternation}")).expect("valid regex")
});

/// Classify `sql` into category-tagged slices for highlighting.
///
/// Behavior:
/// - One master regex scan; at each position the first matching rule wins.
/// - Input no rule matches is emitted as one `Identifier` token per run.
/// - Identifiers that are reserved words become `Keyword` tokens; their
///   `text` stays as typed, `display()` gives the uppercase form.
///
/// Guarantees:
/// - Total: never panics, every byte of `sql` belongs to exactly one token.
/// - Lossless: concatenating every `text` reproduces `sql`.
///
/// Complexity:
/// - O(n) time, no backtracking over consumed input.
pub fn classify(sql: &str) -> Vec<ClassifiedToken<'_>> {
    let mut out = Vec::new();
    let mut pos = 0;

    for caps in MASTER.captures_iter(sql) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > pos {
            out.push(unmatched(sql, pos, whole.start()));
        }
        let category = RULES
            .iter()
            .find(|rule| caps.name(rule.group).is_some())
            .map_or(Category::Identifier, |rule| rule.category);
        out.push(refine(category, whole.as_str(), whole.start()));
        pos = whole.end();
    }
    if pos < sql.len() {
        out.push(unmatched(sql, pos, sql.len()));
    }

    trace!(bytes = sql.len(), tokens = out.len(), "classified input");
    out
}

fn unmatched(sql: &str, start: usize, end: usize) -> ClassifiedToken<'_> {
    ClassifiedToken::new(Category::Identifier, &sql[start..end], start)
}

fn refine(category: Category, text: &str, start: usize) -> ClassifiedToken<'_> {
    let category = match category {
        Category::Identifier if is_reserved(text) => Category::Keyword,
        other => other,
    };
    ClassifiedToken::new(category, text, start)
}
