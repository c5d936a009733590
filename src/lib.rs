//! SQL lexing, canonical formatting and lightweight structural checks.
//!
//! Two pure entry points:
//! - [`format_and_check`]: coarse tokenize, merge compound keywords, pretty-print
//!   and validate. Always returns formatted text, diagnostics are data.
//! - [`classify`]: fine-grained, lossless classification for syntax highlighting.
//!
//! ```rust
//! let outcome = sqltidy::format_and_check("select id,name from t where id=1;");
//! assert_eq!(outcome.formatted, "SELECT id,\nname\nFROM t\nWHERE id=1;");
//! assert!(outcome.is_clean());
//!
//! let tokens = sqltidy::classify("select 1");
//! assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), "select 1");
//! ```
reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(sql);
reexport!(format);
reexport!(check);
reexport!(highlight);
reexport!(engine);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
