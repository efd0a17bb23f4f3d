//! Task items and the store that owns them.
//!
//! The item store validates input, keeps the canonical in-memory list,
//! writes the whole list through after every change, and reports outcomes
//! through the signal store. Persistence failures degrade durability only:
//! the list keeps working in memory.
//!
//! - Domain types in [`domain`]
//! - The [`services::ItemStore`] in [`services`]

pub mod domain;
pub mod services;
