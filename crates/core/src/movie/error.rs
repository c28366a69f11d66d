use thiserror::Error;

/// Errors that can occur when validating a movie before it is stored.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MovieError {
    #[error("Movie title cannot be empty")]
    EmptyTitle,
    #[error("Movie title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Rating must be between 0 and 10, got {0}")]
    InvalidRating(f64),
}

/// Errors that can occur when parsing a movie key from user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MovieKeyError {
    #[error("Invalid movie ID: {0}")]
    InvalidId(String),
    #[error("Movie title cannot be empty")]
    EmptyTitle,
}
