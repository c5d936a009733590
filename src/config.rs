use crate::*;
use confique::Config as _;

/// Process-level settings, read from the environment.
///
/// The engine never reads these directly; convert with `Options::from(&config)`.
#[derive(Debug, confique::Config)]
pub struct Config {
    /// Spaces per indent unit.
    #[config(env = "SQLTIDY_INDENT_WIDTH", default = 4)]
    pub indent_width: usize,
    /// Validate the opening keyword of every statement, not only the first.
    #[config(env = "SQLTIDY_CHECK_EVERY_STATEMENT", default = false)]
    pub check_every_statement: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        let statement_scope = if config.check_every_statement {
            StatementScope::EveryStatement
        } else {
            StatementScope::FirstStatement
        };
        Options {
            indent_width: config.indent_width,
            statement_scope,
        }
    }
}
