//! Shared world state for task list BDD scenarios.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use mockable::DefaultClock;
use rstest::fixture;
use tasklist_core::{
    signal::{adapters::ManualDismissScheduler, services::SignalStore},
    storage::adapters::InMemoryStorage,
    todo::{
        domain::Item,
        services::{ItemStore, ItemStoreError},
    },
};

/// Store type used by the BDD world.
pub type TestItemStore = ItemStore<InMemoryStorage, DefaultClock>;

/// Scenario world for task list behaviour tests.
pub struct TodoWorld {
    pub storage: Arc<InMemoryStorage>,
    pub signals: SignalStore,
    pub store: TestItemStore,
    pub last_create_result: Option<Result<Item, ItemStoreError>>,
    pub declined: Arc<AtomicBool>,
}

impl TodoWorld {
    /// Creates a world over empty storage.
    #[must_use]
    pub fn new() -> Self {
        let storage = Arc::new(InMemoryStorage::new());
        let signals = SignalStore::new(
            Arc::new(ManualDismissScheduler::new()),
            Arc::new(DefaultClock),
        );
        let store = ItemStore::new(Arc::clone(&storage), Arc::new(DefaultClock), signals.clone());

        Self {
            storage,
            signals,
            store,
            last_create_result: None,
            declined: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replaces the store with a fresh one over the same storage and signals.
    pub fn reopen_store(&mut self) {
        self.store = ItemStore::new(
            Arc::clone(&self.storage),
            Arc::new(DefaultClock),
            self.signals.clone(),
        );
    }

    /// Returns `true` once the decline callback has run.
    #[must_use]
    pub fn decline_ran(&self) -> bool {
        self.declined.load(Ordering::SeqCst)
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated step argument into trimmed task texts.
#[must_use]
pub fn split_texts(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .collect()
}
