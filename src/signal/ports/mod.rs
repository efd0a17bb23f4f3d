//! Port contracts for the signal store.

pub mod scheduler;

pub use scheduler::{DismissScheduler, DismissTask};
