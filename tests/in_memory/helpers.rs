//! Shared test helpers for item store integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use rstest::fixture;
use tasklist_core::{
    signal::{adapters::ManualDismissScheduler, services::SignalStore},
    storage::{adapters::InMemoryStorage, ports::KeyValueStorage},
    todo::{domain::Item, services::ItemStore},
};

/// 2025-03-01T09:00:00Z in milliseconds.
pub const START_MS: i64 = 1_740_819_600_000;

/// Clock that moves forward by one second on every reading.
#[derive(Debug)]
pub struct TickingClock {
    next_ms: AtomicI64,
}

impl TickingClock {
    /// Creates a clock whose first reading is [`START_MS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_ms: AtomicI64::new(START_MS),
        }
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let ms = self.next_ms.fetch_add(1000, Ordering::SeqCst);
        DateTime::from_timestamp_millis(ms).unwrap_or_default()
    }
}

/// A store wired to shared storage, a manual scheduler and a ticking clock.
pub struct Session<S: KeyValueStorage> {
    pub scheduler: Arc<ManualDismissScheduler>,
    pub signals: SignalStore,
    pub store: ItemStore<S, TickingClock>,
}

impl<S: KeyValueStorage> Session<S> {
    /// Opens a session over `storage` without loading it.
    #[must_use]
    pub fn open(storage: Arc<S>) -> Self {
        let scheduler = Arc::new(ManualDismissScheduler::new());
        let signals = SignalStore::new(Arc::clone(&scheduler), Arc::new(TickingClock::new()));
        let store = ItemStore::new(storage, Arc::new(TickingClock::new()), signals.clone());
        Self {
            scheduler,
            signals,
            store,
        }
    }

    /// Opens a session over `storage` and loads whatever it holds.
    pub async fn restore(storage: Arc<S>) -> Self {
        let mut session = Self::open(storage);
        session.store.load().await;
        session
    }

    /// Messages of the pending notifications, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.signals
            .notifications()
            .iter()
            .map(|notification| notification.message().to_owned())
            .collect()
    }
}

/// Provides fresh shared in-memory storage for each test.
#[fixture]
pub fn storage() -> InMemoryStorage {
    InMemoryStorage::new()
}

/// Returns the texts of `items`, in order.
#[must_use]
pub fn texts(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.text().as_str().to_owned()).collect()
}
