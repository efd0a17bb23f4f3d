//! Deterministic scheduler driven by an explicit virtual clock.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::signal::ports::{DismissScheduler, DismissTask};

/// Scheduler whose time only moves when [`advance`](Self::advance) is called.
///
/// Useful for tests and for embedders that drive timers from their own event
/// loop. Clones share the same virtual clock and queue.
#[derive(Clone, Default)]
pub struct ManualDismissScheduler {
    state: Arc<Mutex<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    elapsed: Duration,
    next_sequence: u64,
    pending: Vec<PendingTask>,
}

struct PendingTask {
    due: Duration,
    sequence: u64,
    task: DismissTask,
}

impl ManualDismissScheduler {
    /// Creates a scheduler at virtual time zero with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns how much virtual time has elapsed.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.lock().elapsed
    }

    /// Returns the number of tasks that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Moves virtual time forward by `by`, running every task that falls due.
    ///
    /// Tasks run in deadline order (scheduling order breaks ties), outside
    /// the scheduler's lock, so a task may schedule further tasks. Those also
    /// run if they fall within the window. Returns the count of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().elapsed.saturating_add(by);
        let mut fired = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            fired += 1;
        }
        self.lock().elapsed = target;
        fired
    }

    fn pop_due(&self, target: Duration) -> Option<DismissTask> {
        let mut state = self.lock();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by_key(|(_, pending)| (pending.due, pending.sequence))
            .map(|(index, _)| index)?;
        let next = state.pending.swap_remove(index);
        state.elapsed = next.due;
        Some(next.task)
    }
}

impl DismissScheduler for ManualDismissScheduler {
    fn schedule(&self, delay: Duration, task: DismissTask) {
        let mut state = self.lock();
        let due = state.elapsed.saturating_add(delay);
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.pending.push(PendingTask {
            due,
            sequence,
            task,
        });
    }
}

impl fmt::Debug for ManualDismissScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ManualDismissScheduler")
            .field("elapsed", &state.elapsed)
            .field("pending", &state.pending.len())
            .finish()
    }
}
