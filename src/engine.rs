use crate::*;

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;

/// Engine settings. The defaults reproduce the canonical output: four-space
/// indent, first statement start checked only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub indent_width: usize,
    pub statement_scope: StatementScope,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            statement_scope: StatementScope::default(),
        }
    }
}

/// Result of [`format_and_check`]. Formatting always completes, whatever the
/// diagnostics say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    pub formatted: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl FormatOutcome {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// `(formatted text, diagnostic messages)`.
    pub fn into_parts(self) -> (String, Vec<String>) {
        let messages = self.messages();
        (self.formatted, messages)
    }
}

/// Stateless facade over both pipelines. Cheap to clone and safe to share
/// between threads; nothing is kept between calls.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: Options,
}

impl Engine {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn format_and_check(&self, sql: &str) -> FormatOutcome {
        let tokens = tokenize(sql);
        let formatted = format_tokens(&tokens, self.options.indent_width);
        let diagnostics = check_tokens(&tokens, self.options.statement_scope);
        debug!(
            tokens = tokens.len(),
            diagnostics = diagnostics.len(),
            "formatted and checked"
        );
        FormatOutcome {
            formatted,
            diagnostics,
        }
    }

    pub fn classify<'a>(&self, sql: &'a str) -> Vec<ClassifiedToken<'a>> {
        classify(sql)
    }
}

/// Format and check `sql` with default [`Options`].
pub fn format_and_check(sql: &str) -> FormatOutcome {
    Engine::default().format_and_check(sql)
}
