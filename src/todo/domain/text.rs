//! Validated item text and the rules behind it.
//!
//! Lengths count Unicode scalar values of the trimmed text.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Minimum trimmed length of item text.
pub const MIN_TEXT_LENGTH: usize = 1;
/// Maximum trimmed length of item text.
pub const MAX_TEXT_LENGTH: usize = 500;

/// Returns `true` when `value` has content after trimming.
#[must_use]
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns `true` when the trimmed length of `value` lies in `min..=max`.
#[must_use]
pub fn is_valid_length(value: &str, min: usize, max: usize) -> bool {
    let length = value.trim().chars().count();
    (min..=max).contains(&length)
}

/// Validates raw input and returns the trimmed text.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyText`] when nothing remains after
/// trimming and [`ValidationError::TooLong`] when more than
/// [`MAX_TEXT_LENGTH`] characters remain.
///
/// # Examples
///
/// ```
/// use tasklist_core::todo::domain::{ValidationError, validate_text};
///
/// let text = validate_text("  Buy milk  ").expect("valid text");
/// assert_eq!(text.as_str(), "Buy milk");
///
/// assert_eq!(validate_text("   "), Err(ValidationError::EmptyText));
/// assert_eq!(
///     validate_text(&"a".repeat(501)),
///     Err(ValidationError::TooLong { actual_length: 501 })
/// );
/// ```
pub fn validate_text(raw: &str) -> Result<ItemText, ValidationError> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length < MIN_TEXT_LENGTH {
        return Err(ValidationError::EmptyText);
    }
    if length > MAX_TEXT_LENGTH {
        return Err(ValidationError::TooLong {
            actual_length: length,
        });
    }
    Ok(ItemText(trimmed.to_owned()))
}

/// Item text that has passed [`validate_text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemText(String);

impl ItemText {
    /// Validates and wraps `raw`. Equivalent to [`validate_text`].
    ///
    /// # Errors
    ///
    /// See [`validate_text`].
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_text(raw)
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for ItemText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ItemText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
