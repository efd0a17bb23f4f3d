//! Item store configuration.

use crate::todo::domain::FORMAT_VERSION;

/// Storage key the task list envelope is written under.
pub const DEFAULT_STORAGE_KEY: &str = "todos-app-data";

/// Configuration for [`ItemStore`](super::ItemStore).
///
/// # Examples
///
/// ```
/// use tasklist_core::todo::services::ItemStoreConfig;
///
/// let config = ItemStoreConfig::default();
/// assert_eq!(config.storage_key, "todos-app-data");
/// assert_eq!(config.format_version, "1.0");
///
/// let profile = ItemStoreConfig::default().with_storage_key("work-todos");
/// assert_eq!(profile.storage_key, "work-todos");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStoreConfig {
    /// Key the envelope is read from and written to.
    pub storage_key: String,
    /// Version string stamped on every written envelope.
    pub format_version: String,
}

impl Default for ItemStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            format_version: FORMAT_VERSION.to_owned(),
        }
    }
}

impl ItemStoreConfig {
    /// Overrides the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
