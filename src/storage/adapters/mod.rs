//! Key/value storage adapters.

pub mod fs;
pub mod memory;

pub use fs::FsStorage;
pub use memory::InMemoryStorage;
