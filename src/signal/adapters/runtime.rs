//! Scheduler backed by tokio timers.

use std::time::Duration;
use tokio::runtime::Handle;

use crate::signal::ports::{DismissScheduler, DismissTask};

/// Spawns one sleeping task per deferral on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioDismissScheduler {
    handle: Handle,
}

impl TokioDismissScheduler {
    /// Creates a scheduler spawning onto `handle`.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler for the runtime the caller is running inside.
    ///
    /// Returns `None` outside a tokio runtime.
    #[must_use]
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl DismissScheduler for TokioDismissScheduler {
    fn schedule(&self, delay: Duration, task: DismissTask) {
        // The join handle is dropped on purpose: the task detaches.
        drop(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        }));
    }
}
