//! A single JSON document stored under one key.

use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::storage::ports::{KeyValueStorage, StorageError};

/// Errors returned while reading or writing a [`JsonDocument`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The storage adapter failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The value could not be serialised.
    #[error("failed to encode document '{key}': {source}")]
    Encode {
        /// Document key.
        key: String,
        /// Serialiser failure.
        source: serde_json::Error,
    },

    /// The stored bytes are not a valid document.
    #[error("failed to decode document '{key}': {source}")]
    Decode {
        /// Document key.
        key: String,
        /// Deserialiser failure.
        source: serde_json::Error,
    },
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Typed JSON value persisted whole under a fixed key.
///
/// Every write replaces the stored document. There is no partial update or
/// merge.
pub struct JsonDocument<S, T> {
    storage: Arc<S>,
    key: String,
    _value: PhantomData<fn() -> T>,
}

impl<S, T> Clone for JsonDocument<S, T> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            key: self.key.clone(),
            _value: PhantomData,
        }
    }
}

impl<S, T> JsonDocument<S, T>
where
    S: KeyValueStorage,
    T: Serialize + DeserializeOwned,
{
    /// Creates a document bound to `key` in `storage`.
    #[must_use]
    pub fn new(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            _value: PhantomData,
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads and decodes the document.
    ///
    /// An absent key and an empty value both read as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Storage`] when the adapter fails and
    /// [`DocumentError::Decode`] when the stored bytes do not parse.
    pub async fn read(&self) -> DocumentResult<Option<T>> {
        let Some(bytes) = self.storage.get(&self.key).await? else {
            return Ok(None);
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| DocumentError::Decode {
                key: self.key.clone(),
                source,
            })
    }

    /// Reads the document, falling back to `T::default()` on any failure.
    ///
    /// Failures are logged and never returned.
    pub async fn load_or_default(&self) -> T
    where
        T: Default,
    {
        match self.read().await {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "falling back to default document");
                T::default()
            }
        }
    }

    /// Encodes `value` and overwrites the stored document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Encode`] when serialisation fails and
    /// [`DocumentError::Storage`] when the adapter rejects the write.
    pub async fn write(&self, value: &T) -> DocumentResult<()> {
        let bytes = serde_json::to_vec(value).map_err(|source| DocumentError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set(&self.key, &bytes).await?;
        Ok(())
    }

    /// Deletes the stored document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Storage`] when the adapter rejects the delete.
    pub async fn clear(&self) -> DocumentResult<()> {
        self.storage.delete(&self.key).await?;
        Ok(())
    }
}
