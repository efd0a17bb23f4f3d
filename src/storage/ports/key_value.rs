//! Byte-string key/value storage port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for key/value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Fallible key/value storage holding opaque byte strings.
///
/// Every call resolves, successfully or with a [`StorageError`], before the
/// caller continues. Whether the adapter blocks or awaits internally is its
/// own concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key has never been written or was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the backing store cannot be read.
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Overwrites the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the value cannot be stored, for
    /// example because a quota is exhausted.
    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the removal fails.
    async fn delete(&self, key: &str) -> StorageResult<()>;
}

/// Errors returned by key/value storage adapters.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Reading from the backing store failed.
    #[error("storage read failed for key '{key}': {cause}")]
    Read {
        /// Key being read.
        key: String,
        /// Underlying adapter failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// Writing to the backing store failed.
    #[error("storage write failed for key '{key}': {cause}")]
    Write {
        /// Key being written or deleted.
        key: String,
        /// Underlying adapter failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wraps a read failure for `key`.
    pub fn read(key: &str, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read {
            key: key.to_owned(),
            cause: Arc::new(err),
        }
    }

    /// Wraps a write failure for `key`.
    pub fn write(key: &str, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write {
            key: key.to_owned(),
            cause: Arc::new(err),
        }
    }

    /// Returns the key the failed operation addressed.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Read { key, .. } | Self::Write { key, .. } => key,
        }
    }
}
