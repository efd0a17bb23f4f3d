//! Typed access on top of raw key/value storage.

mod document;

pub use document::{DocumentError, DocumentResult, JsonDocument};
