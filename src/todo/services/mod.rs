//! Application services for the task list.

mod config;
mod store;

pub use config::{DEFAULT_STORAGE_KEY, ItemStoreConfig};
pub use store::{ItemStore, ItemStoreError, ItemStoreResult, messages};
