//! Error types for the CLI layer.

use thiserror::Error;

/// Caller-usage errors, distinct from data errors raised by the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Wrong number of file-path arguments.
    #[error("expected 3 arguments, got {got}")]
    ArgumentCount { got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_count_display() {
        let err = CliError::ArgumentCount { got: 0 };
        assert_eq!(err.to_string(), "expected 3 arguments, got 0");

        let err = CliError::ArgumentCount { got: 4 };
        assert_eq!(err.to_string(), "expected 3 arguments, got 4");
    }
}
