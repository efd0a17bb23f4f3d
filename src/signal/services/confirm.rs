//! Awaitable confirmation on top of the callback-based prompt.

use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;

use super::SignalStore;
use crate::signal::domain::{ConfirmationCallback, ConfirmationOptions};

/// How an awaited confirmation prompt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmOutcome {
    /// The user accepted.
    Accepted,
    /// The user declined.
    Declined,
    /// The prompt was replaced or hidden without an answer.
    Dismissed,
}

type SharedSender = Arc<Mutex<Option<oneshot::Sender<ConfirmOutcome>>>>;

fn answer(
    sender: SharedSender,
    outcome: ConfirmOutcome,
    inner: Option<ConfirmationCallback>,
) -> impl FnOnce() + Send + 'static {
    move || {
        if let Some(callback) = inner {
            callback();
        }
        let taken = sender.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(tx) = taken {
            // The waiting side may have given up; nothing to report then.
            tx.send(outcome).ok();
        }
    }
}

impl SignalStore {
    /// Shows a prompt and waits for it to be answered.
    ///
    /// Any callbacks already set on `options` still run before the returned
    /// future resolves. If another request replaces this prompt, or
    /// [`resolve_confirmation`](Self::resolve_confirmation) hides it without
    /// an answer, the outcome is [`ConfirmOutcome::Dismissed`].
    pub async fn confirm(&self, mut options: ConfirmationOptions) -> ConfirmOutcome {
        let (tx, rx) = oneshot::channel();
        let sender: SharedSender = Arc::new(Mutex::new(Some(tx)));
        let (on_accept, on_decline) = options.take_callbacks();

        let prompt = options
            .on_accept(answer(
                Arc::clone(&sender),
                ConfirmOutcome::Accepted,
                on_accept,
            ))
            .on_decline(answer(sender, ConfirmOutcome::Declined, on_decline));
        self.request_confirmation(prompt);

        rx.await.unwrap_or(ConfirmOutcome::Dismissed)
    }
}
