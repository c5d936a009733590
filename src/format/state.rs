/// Mutable state threaded through one formatting pass.
///
/// Invariants:
/// - `indent_level` is the current parenthesis depth, never negative.
/// - `lines` only ever holds complete, already indented lines; an empty
///   string is a statement separator.
/// - After `end_statement` the three flags are back at their defaults.
#[derive(Debug, Default)]
pub struct FormatterState {
    pub indent_level: usize,
    /// Inside SELECT columns, INSERT columns, VALUES tuples or CREATE TABLE
    /// definitions, where each top-level comma ends a line.
    pub inside_list: bool,
    /// Between GRANT/REVOKE and the ON/TO that ends the privilege list.
    pub in_grant_priv_list: bool,
    pending: Vec<String>,
    lines: Vec<String>,
}

impl FormatterState {
    pub fn push(&mut self, word: impl Into<String>) {
        self.pending.push(word.into());
    }

    /// Glue `suffix` onto the last pending word. Returns false when there is
    /// no pending word.
    pub fn attach_pending(&mut self, suffix: char) -> bool {
        match self.pending.last_mut() {
            Some(last) => {
                last.push(suffix);
                true
            }
            None => false,
        }
    }

    /// Glue `suffix` onto the last flushed line, trailing whitespace removed.
    /// Blank separator lines count only when `through_blank` is set.
    pub fn attach_flushed(&mut self, suffix: char, through_blank: bool) -> bool {
        match self.lines.last_mut() {
            Some(line) if through_blank || !line.is_empty() => {
                line.truncate(line.trim_end().len());
                line.push(suffix);
                true
            }
            _ => false,
        }
    }

    /// Emit the pending words as one line at the current indent. Lines that
    /// would be blank are dropped.
    pub fn flush(&mut self, unit: &str) {
        if self.pending.is_empty() {
            return;
        }
        let line = self.pending.join(" ");
        let line = line.trim();
        if !line.is_empty() {
            self.lines.push(format!("{}{line}", unit.repeat(self.indent_level)));
        }
        self.pending.clear();
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Statement boundary: blank separator line, then reset depth and flags.
    pub fn end_statement(&mut self) {
        self.lines.push(String::new());
        self.indent_level = 0;
        self.inside_list = false;
        self.in_grant_priv_list = false;
    }

    pub fn into_output(self) -> String {
        let mut out = self.lines.join("\n");
        out.truncate(out.trim_end().len());
        out
    }
}
