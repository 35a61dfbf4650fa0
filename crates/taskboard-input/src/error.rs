//! Error types for input validation.

use thiserror::Error;

/// Errors produced while validating a project form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Title is missing or blank.
    #[error("title must not be empty")]
    EmptyTitle,

    /// Description is missing or blank.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Description is shorter than the minimum length.
    #[error("description must be at least {min} characters, got {got}")]
    DescriptionTooShort { min: usize, got: usize },

    /// People field is not a number.
    #[error("people must be a number: {0}")]
    PeopleNotANumber(String),

    /// People count is outside the allowed range.
    #[error("people must be between {min} and {max}, got {got}")]
    PeopleOutOfRange { min: u32, max: u32, got: u32 },
}

/// Result type alias for input validation.
pub type Result<T> = std::result::Result<T, InputError>;
