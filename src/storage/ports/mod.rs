//! Port contracts for key/value persistence.

pub mod key_value;

pub use key_value::{KeyValueStorage, StorageError, StorageResult};

#[cfg(test)]
pub use key_value::MockKeyValueStorage;
