//! Error types for item text validation.

use thiserror::Error;

/// Errors returned when item text fails validation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The text is empty after trimming surrounding whitespace.
    #[error("please enter a task")]
    EmptyText,

    /// The trimmed text exceeds the maximum length.
    #[error("task text cannot exceed {max} characters (current: {actual_length})", max = super::MAX_TEXT_LENGTH)]
    TooLong {
        /// Trimmed length in characters.
        actual_length: usize,
    },
}
