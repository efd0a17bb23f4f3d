//! Key/value persistence boundary.
//!
//! The core never talks to a concrete store directly. It goes through the
//! [`ports::KeyValueStorage`] contract, which embedders implement for their
//! platform (browser local storage, a settings file, and so on).
//!
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Typed document access in [`services`]

pub mod adapters;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
