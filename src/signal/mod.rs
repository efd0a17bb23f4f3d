//! Transient UI signals: notifications and the confirmation prompt.
//!
//! The signal store is a side channel the item store reports outcomes
//! through. It never depends on the item store. Notifications expire on
//! their own through the [`ports::DismissScheduler`] port. Confirmation is a
//! single replaceable prompt with accept and decline continuations.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Scheduler adapters in [`adapters`]
//! - The [`services::SignalStore`] itself in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
