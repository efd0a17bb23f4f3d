//! In-memory key/value storage for tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, PoisonError, RwLock};

use crate::storage::ports::{KeyValueStorage, StorageError, StorageResult};

/// Thread-safe in-memory key/value storage.
///
/// Clones share the same entries, so a test can keep a handle to inspect
/// what a store wrote. Reads and writes can be switched to fail to simulate
/// quota exhaustion or an unavailable backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<InMemoryStorageState>>,
}

#[derive(Debug, Default)]
struct InMemoryStorageState {
    entries: HashMap<String, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        storage.insert_raw(key, value);
        storage
    }

    /// Stores raw bytes directly, bypassing failure injection.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.entries.insert(key.into(), value.into());
    }

    /// Returns the raw bytes stored under `key`, bypassing failure injection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.entries.get(key).cloned()
    }

    /// Returns `true` when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.entries.is_empty()
    }

    /// Makes subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.fail_reads = fail;
    }

    /// Makes subsequent writes and deletes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.fail_writes = fail;
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let state = self
            .state
            .read()
            .map_err(|err| StorageError::read(key, io::Error::other(err.to_string())))?;
        if state.fail_reads {
            return Err(StorageError::read(key, io::Error::other("storage unavailable")));
        }
        Ok(state.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| StorageError::write(key, io::Error::other(err.to_string())))?;
        if state.fail_writes {
            return Err(StorageError::write(key, io::Error::other("storage quota exceeded")));
        }
        state.entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| StorageError::write(key, io::Error::other(err.to_string())))?;
        if state.fail_writes {
            return Err(StorageError::write(key, io::Error::other("storage unavailable")));
        }
        state.entries.remove(key);
        Ok(())
    }
}
