//! Whole-document layout persisted for the task list.

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

use super::Item;

/// Format version written into every envelope.
pub const FORMAT_VERSION: &str = "1.0";

/// The persisted task list.
///
/// Built fresh from the in-memory list on every save and written whole.
/// `todos` reads as empty when missing or `null`. `last_synced_at` is
/// reserved for sync and always written as `null`. Whatever a stored
/// document holds there is discarded on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Items in insertion order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub todos: Vec<Item>,
    /// Format version of the document.
    #[serde(default)]
    pub version: String,
    /// Reserved synchronisation timestamp.
    #[serde(default, deserialize_with = "discard")]
    pub last_synced_at: Option<String>,
}

impl Envelope {
    /// Creates an envelope for `todos` tagged with `version`.
    #[must_use]
    pub fn new(todos: Vec<Item>, version: impl Into<String>) -> Self {
        Self {
            todos,
            version: version.into(),
            last_synced_at: None,
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new(Vec::new(), FORMAT_VERSION)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

fn discard<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(None)
}
