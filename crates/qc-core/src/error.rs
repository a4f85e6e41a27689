//! Error types for the quiz engine.

use thiserror::Error;

use crate::quote::Category;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while building or answering questions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// One of the quote collections has not been loaded yet.
    #[error("no {0} quotes loaded")]
    NotReady(Category),

    /// Neither collection offers an author different from the true one.
    #[error("no distractor available for \"{0}\"")]
    NoDistractor(String),

    /// A category name that is neither `rap` nor `author`.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
