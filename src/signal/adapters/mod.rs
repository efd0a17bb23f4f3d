//! Dismiss scheduler adapters.

pub mod manual;
pub mod runtime;

pub use manual::ManualDismissScheduler;
pub use runtime::TokioDismissScheduler;
