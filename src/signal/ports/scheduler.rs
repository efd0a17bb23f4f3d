//! Deferred-task port used for notification auto-dismissal.

use std::time::Duration;

/// One-shot task run when a deferral elapses.
pub type DismissTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks once after a delay.
///
/// Scheduling is fire-and-forget: there is no handle to cancel a task, and
/// tasks with different delays carry no ordering guarantee relative to each
/// other. A task must stay harmless if the state it targets is gone.
pub trait DismissScheduler: Send + Sync {
    /// Arranges for `task` to run once, `delay` from now.
    fn schedule(&self, delay: Duration, task: DismissTask);
}
