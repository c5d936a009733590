#![cfg(test)]
pub use rstest::*;

/// Install a test-friendly tracing subscriber once per test binary.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=sqltidy=trace`.
pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

mod logging_tests {
    use super::super::*;

    #[test]
    fn init_is_idempotent() {
        common_init();
        common_init();
        let outcome = format_and_check("SELECT 1;");
        assert!(outcome.is_clean());
    }
}
