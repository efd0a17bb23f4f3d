//! The item store: canonical task list with write-through persistence.

use mockable::Clock;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::ItemStoreConfig;
use crate::{
    signal::services::SignalStore,
    storage::{
        ports::KeyValueStorage,
        services::{DocumentResult, JsonDocument},
    },
    todo::domain::{Envelope, Item, ItemId, ValidationError, validate_text},
};

/// Notification texts emitted by the item store.
pub mod messages {
    /// Shown after an item is created.
    pub const CREATED: &str = "Task added";
    /// Shown after an item is toggled to completed.
    pub const MARKED_COMPLETED: &str = "Marked as completed";
    /// Shown after an item is toggled back to active.
    pub const MARKED_ACTIVE: &str = "Marked as active";
    /// Shown after an item's text is edited.
    pub const UPDATED: &str = "Task updated";
    /// Shown after an item is deleted.
    pub const REMOVED: &str = "Task deleted";
    /// Shown when saves start failing.
    pub const STORAGE_DEGRADED: &str = "Changes could not be saved; working in memory";
}

/// Errors returned to callers of item store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemStoreError {
    /// The supplied text failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No item has the given identifier.
    #[error("task not found: {0}")]
    NotFound(ItemId),
}

/// Result type for item store operations.
pub type ItemStoreResult<T> = Result<T, ItemStoreError>;

/// Owner of the task list.
///
/// Every successful mutation immediately writes the whole list through the
/// storage adapter and then posts a notification. A failed write is logged
/// and recorded in [`is_persistence_healthy`](Self::is_persistence_healthy)
/// but never undoes the mutation or fails the operation.
pub struct ItemStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    document: JsonDocument<S, Envelope>,
    clock: Arc<C>,
    signals: SignalStore,
    config: ItemStoreConfig,
    items: Vec<Item>,
    persistence_healthy: bool,
}

impl<S, C> ItemStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    /// Creates an empty store with the default configuration.
    ///
    /// Call [`load`](Self::load) to restore persisted items.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>, signals: SignalStore) -> Self {
        Self::with_config(storage, clock, signals, ItemStoreConfig::default())
    }

    /// Creates an empty store with an explicit configuration.
    #[must_use]
    pub fn with_config(
        storage: Arc<S>,
        clock: Arc<C>,
        signals: SignalStore,
        config: ItemStoreConfig,
    ) -> Self {
        Self {
            document: JsonDocument::new(storage, config.storage_key.clone()),
            clock,
            signals,
            config,
            items: Vec::new(),
            persistence_healthy: true,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ItemStoreConfig {
        &self.config
    }

    /// Returns the signal store outcomes are reported through.
    #[must_use]
    pub const fn signals(&self) -> &SignalStore {
        &self.signals
    }

    /// Returns all items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Returns uncompleted items, newest first.
    #[must_use]
    pub fn active_items(&self) -> Vec<&Item> {
        self.newest_first(|item| !item.is_completed())
    }

    /// Returns completed items, newest first.
    #[must_use]
    pub fn completed_items(&self) -> Vec<&Item> {
        self.newest_first(Item::is_completed)
    }

    /// Returns the total number of items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `false` when the most recent save failed.
    #[must_use]
    pub const fn is_persistence_healthy(&self) -> bool {
        self.persistence_healthy
    }

    fn newest_first(&self, keep: impl Fn(&Item) -> bool) -> Vec<&Item> {
        let mut selected: Vec<&Item> = self.items.iter().filter(|item| keep(item)).collect();
        selected.sort_by_key(|item| Reverse(item.created_at()));
        selected
    }

    /// Validates `text` and appends a new active item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Validation`] when the text is empty or too
    /// long. Nothing is changed in that case.
    pub async fn create(&mut self, text: &str) -> ItemStoreResult<Item> {
        let valid_text = validate_text(text)?;
        let item = Item::new(valid_text, &*self.clock);
        self.items.push(item.clone());

        self.save().await;
        self.signals.success(messages::CREATED);
        Ok(item)
    }

    /// Flips the completion status of the item with `id`.
    ///
    /// Does nothing, and posts no notification, when `id` is unknown.
    pub async fn toggle(&mut self, id: &ItemId) {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return;
        };
        item.toggle(&*self.clock);
        let completed = item.is_completed();

        self.save().await;
        self.signals.success(if completed {
            messages::MARKED_COMPLETED
        } else {
            messages::MARKED_ACTIVE
        });
    }

    /// Replaces the text of the item with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Validation`] when the text is invalid and
    /// [`ItemStoreError::NotFound`] when `id` is unknown. Text is checked
    /// first. Nothing is changed on error.
    pub async fn update(&mut self, id: &ItemId, text: &str) -> ItemStoreResult<()> {
        let valid_text = validate_text(text)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| ItemStoreError::NotFound(id.clone()))?;
        item.set_text(valid_text, &*self.clock);

        self.save().await;
        self.signals.success(messages::UPDATED);
        Ok(())
    }

    /// Deletes the item with `id`.
    ///
    /// Does nothing, and posts no notification, when `id` is unknown.
    pub async fn remove(&mut self, id: &ItemId) {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            return;
        };
        self.items.remove(index);

        self.save().await;
        self.signals.success(messages::REMOVED);
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// A missing key, unreadable storage or a malformed document all leave
    /// the store empty. Failures are logged, never returned. Persisted items
    /// with invalid text or a repeated id are dropped.
    pub async fn load(&mut self) {
        self.items = match self.document.read().await {
            Ok(Some(envelope)) => sanitize(envelope.todos),
            Ok(None) => {
                debug!(key = %self.document.key(), "no persisted task list");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    key = %self.document.key(),
                    error = %err,
                    "failed to read persisted task list; starting empty"
                );
                Vec::new()
            }
        };
        debug!(count = self.items.len(), "task list loaded");
    }

    /// Writes the whole list to storage.
    ///
    /// Called after every successful mutation. Failure marks the store
    /// unhealthy, logs the error, and posts a warning notification the first
    /// time saves start failing. It never rolls back memory.
    pub async fn save(&mut self) {
        let envelope = Envelope::new(self.items.clone(), self.config.format_version.clone());
        match self.document.write(&envelope).await {
            Ok(()) => {
                if !self.persistence_healthy {
                    info!(key = %self.document.key(), "task list persistence recovered");
                }
                self.persistence_healthy = true;
                debug!(count = envelope.todos.len(), "task list saved");
            }
            Err(err) => {
                warn!(
                    key = %self.document.key(),
                    error = %err,
                    "failed to persist task list; continuing in memory"
                );
                if self.persistence_healthy {
                    self.signals.warning(messages::STORAGE_DEGRADED);
                }
                self.persistence_healthy = false;
            }
        }
    }

    /// Deletes the persisted document, leaving the in-memory list intact.
    ///
    /// # Errors
    ///
    /// Returns the storage failure when the delete is rejected.
    pub async fn clear_persisted(&self) -> DocumentResult<()> {
        self.document.clear().await
    }
}

fn sanitize(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| {
            let id = item.id().clone();
            let valid = match item.revalidated() {
                Ok(valid) => valid,
                Err(err) => {
                    warn!(item_id = %id, error = %err, "dropping invalid persisted task");
                    return None;
                }
            };
            // Only kept items claim their id.
            if !seen.insert(id.clone()) {
                warn!(item_id = %id, "dropping persisted task with duplicate id");
                return None;
            }
            Some(valid)
        })
        .collect()
}
