//! Error types for answer-core.

use thiserror::Error;

/// Result type alias using AnswerError.
pub type Result<T> = std::result::Result<T, AnswerError>;

/// Errors raised when converting untyped input into grading types.
///
/// The matching functions themselves never fail; these only occur at the
/// boundary where a caller hands over loosely typed data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("expected answer must be a string or an array of strings, got {found}")]
    InvalidExpectedAnswer { found: &'static str },

    #[error("expected answer alternative at index {index} is not a string")]
    InvalidAlternative { index: usize },
}
