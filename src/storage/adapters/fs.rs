//! Directory-backed key/value storage.
//!
//! Each key maps to one file inside a capability-scoped directory. Writes go
//! to a temporary sibling first and are renamed into place, so a crash never
//! leaves a half-written document under the real key.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::storage::ports::{KeyValueStorage, StorageError, StorageResult};

const TEMP_SUFFIX: &str = ".tmp";

/// Key/value storage rooted in a single directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    dir: Arc<Dir>,
}

impl FsStorage {
    /// Opens storage rooted at `path`, which must already exist.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the directory cannot be opened.
    pub fn open(path: &Utf8Path) -> io::Result<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already-opened directory capability.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn checked_file_name(key: &str) -> io::Result<&str> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && !key.ends_with(TEMP_SUFFIX)
        && key.chars().all(allowed);
    if is_valid {
        Ok(key)
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unsupported storage key '{key}'"),
        ))
    }
}

// The directory calls below are synchronous. Documents are small and every
// caller awaits the result before continuing anyway.
#[async_trait]
impl KeyValueStorage for FsStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let file_name = checked_file_name(key).map_err(|err| StorageError::read(key, err))?;
        match self.dir.read(file_name) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::read(key, err)),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let file_name = checked_file_name(key).map_err(|err| StorageError::write(key, err))?;
        let temp_name = format!("{file_name}{TEMP_SUFFIX}");
        self.dir
            .write(&temp_name, value)
            .map_err(|err| StorageError::write(key, err))?;
        self.dir
            .rename(&temp_name, &self.dir, file_name)
            .map_err(|err| StorageError::write(key, err))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let file_name = checked_file_name(key).map_err(|err| StorageError::write(key, err))?;
        match self.dir.remove_file(file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::write(key, err)),
        }
    }
}
