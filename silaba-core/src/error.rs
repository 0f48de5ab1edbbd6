//! Core error types (deterministic only)

use thiserror::Error;

/// Syllabization errors (no I/O, no external failures)
///
/// The scanners themselves are total: any non-empty word produces some
/// syllabification. Only the input domain is checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyllabizeError {
    /// The input is not a single word
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The reason why the input was rejected
        reason: String,
    },
}

impl SyllabizeError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SyllabizeError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type for syllabization
pub type Result<T> = std::result::Result<T, SyllabizeError>;
