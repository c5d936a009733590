/// Failures outside the engine itself: reading input and loading configuration.
///
/// Formatting, checking and classification never fail; malformed SQL is
/// reported through [`crate::Diagnostic`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failures_convert_with_question_mark() {
        fn read() -> Result<String> {
            Err(std::io::Error::other("stdin closed"))?
        }
        let err = read().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: stdin closed");
    }
}
