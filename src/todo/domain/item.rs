//! Task item entity.

use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{ItemId, ItemText, ValidationError, validate_text};
use crate::timestamp::Timestamp;

/// A single task with text and completion status.
///
/// `updated_at` never precedes `created_at`: a clock reading earlier than the
/// creation time is clamped to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    text: ItemText,
    #[serde(default)]
    completed: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Item {
    /// Creates an active item stamped with the current clock time.
    #[must_use]
    pub fn new(text: ItemText, clock: &impl Clock) -> Self {
        let timestamp = Timestamp::now(clock);
        Self {
            id: ItemId::new(),
            text,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the item text.
    #[must_use]
    pub const fn text(&self) -> &ItemText {
        &self.text
    }

    /// Returns `true` when the item is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the latest edit or toggle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Flips the completion status.
    pub fn toggle(&mut self, clock: &impl Clock) {
        self.completed = !self.completed;
        self.touch(clock);
    }

    /// Replaces the text, leaving completion untouched.
    pub fn set_text(&mut self, text: ItemText, clock: &impl Clock) {
        self.text = text;
        self.touch(clock);
    }

    /// Re-checks an item read from storage.
    ///
    /// Storage is outside the validator's reach, so the text is validated
    /// (and trimmed) again here and `updated_at` is clamped to `created_at`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for text that breaks the length rules.
    pub fn revalidated(mut self) -> Result<Self, ValidationError> {
        self.text = validate_text(self.text.as_str())?;
        self.updated_at = self.updated_at.max(self.created_at);
        Ok(self)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Timestamp::now(clock).max(self.created_at);
    }
}
