//! Signal store service.

mod config;
mod confirm;
mod store;

pub use config::{DEFAULT_NOTIFICATION_DURATION_MS, SignalConfig};
pub use confirm::ConfirmOutcome;
pub use store::SignalStore;
