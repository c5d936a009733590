/// Split a script into statements on `;`.
///
/// Semicolons inside single or double quoted text do not split. Pieces are
/// trimmed and empty pieces dropped; the terminating `;` is not included.
/// Comments are not recognized, so a `;` inside `-- ...` still splits.
pub fn split_statements(sql: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in sql.char_indices() {
        match (quote, c) {
            (None, '\'' | '"') => quote = Some(c),
            (Some(q), _) if q == c => quote = None,
            (None, ';') => {
                push_trimmed(&mut out, &sql[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_trimmed(&mut out, &sql[start..]);

    out
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}
