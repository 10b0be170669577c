//! Error types for collegefinder.
//!
//! Filtering, sorting, and scoring are total functions and have no error
//! type. These errors cover the input boundaries around them: quiz answers
//! and comparison selections coming from a user, and the storage and
//! authentication collaborators.

use thiserror::Error;

/// Errors from advancing a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The chosen option does not exist on the current question.
    #[error("question {question} has {available} options, got option {option}")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        available: usize,
    },

    /// The quiz is already completed; reset it before answering again.
    #[error("quiz is already completed")]
    AlreadyCompleted,
}

/// Errors from editing a comparison selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The selection already holds the maximum number of colleges.
    #[error("at most {max} colleges can be compared at once")]
    SelectionFull { max: usize },

    /// The college is already selected.
    #[error("college {0} is already selected")]
    AlreadySelected(String),
}

/// Errors from the key-value storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded for storage.
    #[error("failed to encode value for key {key}: {message}")]
    Encode { key: String, message: String },
}

/// Errors from the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The credentials were rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A required field was blank.
    #[error("{0} must not be empty")]
    MissingField(&'static str),
}
