//! The signal store: pending notifications plus the confirmation singleton.

use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tracing::debug;

use super::SignalConfig;
use crate::signal::{
    domain::{
        ConfirmationCallback, ConfirmationOptions, ConfirmationRequest, ConfirmationView,
        Notification, NotificationId, NotificationKind,
    },
    ports::DismissScheduler,
};

#[derive(Debug, Default)]
struct SignalState {
    notifications: Vec<Notification>,
    confirmation: ConfirmationRequest,
    // Bumped on every new request so a settling callback can tell whether
    // it replaced the prompt it was answering.
    confirmation_generation: u64,
}

impl SignalState {
    fn remove_notification(&mut self, id: &NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|notification| notification.id() != id);
        self.notifications.len() != before
    }
}

fn lock_state(state: &Mutex<SignalState>) -> MutexGuard<'_, SignalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Store for transient UI signals.
///
/// Cloning yields another handle to the same state. Every operation is total:
/// unknown ids and repeated resolutions are silently ignored.
#[derive(Clone)]
pub struct SignalStore {
    state: Arc<Mutex<SignalState>>,
    scheduler: Arc<dyn DismissScheduler>,
    clock: Arc<dyn Clock + Send + Sync>,
    config: SignalConfig,
}

impl SignalStore {
    /// Creates a store with the default configuration.
    #[must_use]
    pub fn new<D, C>(scheduler: Arc<D>, clock: Arc<C>) -> Self
    where
        D: DismissScheduler + 'static,
        C: Clock + Send + Sync + 'static,
    {
        Self::with_config(scheduler, clock, SignalConfig::default())
    }

    /// Creates a store with an explicit configuration.
    #[must_use]
    pub fn with_config<D, C>(scheduler: Arc<D>, clock: Arc<C>, config: SignalConfig) -> Self
    where
        D: DismissScheduler + 'static,
        C: Clock + Send + Sync + 'static,
    {
        Self {
            state: Arc::default(),
            scheduler,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SignalConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, SignalState> {
        lock_state(&self.state)
    }

    /// Shows a notification for the configured default duration.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        self.notify_for(kind, message, self.config.default_duration_ms)
    }

    /// Shows a notification for `duration_ms` milliseconds.
    ///
    /// A positive duration schedules exactly one auto-dismiss of the new id,
    /// measured from now. Zero keeps it until [`dismiss`](Self::dismiss) or
    /// [`clear_all`](Self::clear_all).
    pub fn notify_for(
        &self,
        kind: NotificationKind,
        message: impl Into<String>,
        duration_ms: u64,
    ) -> NotificationId {
        let notification = Notification::new(kind, message, duration_ms, &*self.clock);
        let id = notification.id().clone();
        self.lock().notifications.push(notification);

        if duration_ms > 0 {
            let state = Arc::downgrade(&self.state);
            let target = id.clone();
            self.scheduler.schedule(
                Duration::from_millis(duration_ms),
                Box::new(move || expire(&state, &target)),
            );
        }
        id
    }

    /// Shows a success notification.
    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.notify(NotificationKind::Success, message)
    }

    /// Shows an error notification.
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.notify(NotificationKind::Error, message)
    }

    /// Shows a warning notification.
    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.notify(NotificationKind::Warning, message)
    }

    /// Shows an informational notification.
    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.notify(NotificationKind::Info, message)
    }

    /// Removes the notification with `id`, if it is still pending.
    pub fn dismiss(&self, id: &NotificationId) {
        self.lock().remove_notification(id);
    }

    /// Removes every pending notification.
    ///
    /// Timers already scheduled stay scheduled and fire against absent ids.
    pub fn clear_all(&self) {
        self.lock().notifications.clear();
    }

    /// Returns the pending notifications in creation order.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    /// Replaces the confirmation prompt and makes it visible.
    ///
    /// Any prompt already showing is discarded along with its callbacks.
    pub fn request_confirmation(&self, options: ConfirmationOptions) {
        let replaced = {
            let mut state = self.lock();
            state.confirmation_generation = state.confirmation_generation.wrapping_add(1);
            std::mem::replace(
                &mut state.confirmation,
                ConfirmationRequest::from_options(options),
            )
        };
        // Dropped outside the lock: a callback's captures may run code on drop.
        drop(replaced);
    }

    /// Hides the prompt and resets it to the default, running no callback.
    ///
    /// Callers that answered the prompt run the chosen callback first, or use
    /// [`accept_confirmation`](Self::accept_confirmation) and
    /// [`decline_confirmation`](Self::decline_confirmation), which do both.
    pub fn resolve_confirmation(&self) {
        let replaced = std::mem::take(&mut self.lock().confirmation);
        drop(replaced);
    }

    /// Runs the accept callback, then hides the prompt.
    ///
    /// Returns `false`, running nothing, when no prompt is visible.
    pub fn accept_confirmation(&self) -> bool {
        self.settle(|(on_accept, _)| on_accept)
    }

    /// Runs the decline callback, then hides the prompt.
    ///
    /// Returns `false`, running nothing, when no prompt is visible.
    pub fn decline_confirmation(&self) -> bool {
        self.settle(|(_, on_decline)| on_decline)
    }

    /// Returns what the prompt currently shows.
    #[must_use]
    pub fn confirmation(&self) -> ConfirmationView {
        self.lock().confirmation.view()
    }

    fn settle(
        &self,
        choose: impl FnOnce(
            (Option<ConfirmationCallback>, Option<ConfirmationCallback>),
        ) -> Option<ConfirmationCallback>,
    ) -> bool {
        let (callbacks, generation) = {
            let mut state = self.lock();
            if !state.confirmation.is_visible() {
                return false;
            }
            (
                state.confirmation.take_callbacks(),
                state.confirmation_generation,
            )
        };

        if let Some(callback) = choose(callbacks) {
            callback();
        }

        let replaced = {
            let mut state = self.lock();
            // A callback that issued a follow-up prompt keeps it showing.
            (state.confirmation_generation == generation)
                .then(|| std::mem::take(&mut state.confirmation))
        };
        drop(replaced);
        true
    }
}

fn expire(state: &Weak<Mutex<SignalState>>, id: &NotificationId) {
    let Some(state) = state.upgrade() else {
        return;
    };
    if lock_state(&state).remove_notification(id) {
        debug!(notification_id = %id, "notification expired");
    }
}
