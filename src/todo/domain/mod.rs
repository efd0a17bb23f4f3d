//! Domain model for task items.
//!
//! Items carry validated text and millisecond timestamps. No storage or
//! UI concerns live here.

mod envelope;
mod error;
mod ids;
mod item;
mod text;

pub use envelope::{Envelope, FORMAT_VERSION};
pub use error::ValidationError;
pub use ids::ItemId;
pub use item::Item;
pub use text::{
    ItemText, MAX_TEXT_LENGTH, MIN_TEXT_LENGTH, is_not_empty, is_valid_length, validate_text,
};
