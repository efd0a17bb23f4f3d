//! Tasklist core: state and persistence for a client-side task list.
//!
//! Users create, edit, complete and delete short text items. This crate owns
//! those items, validates them, persists them through a pluggable key/value
//! adapter, and reports outcomes through transient notifications and a
//! confirmation prompt. Rendering, routing and input handling are left to
//! the embedding presentation layer.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and timers
//! - **Adapters**: Concrete implementations of ports (memory, filesystem, tokio)
//!
//! Stores are explicit values. Construct them once per session and pass
//! them by reference. There are no global singletons.
//!
//! # Modules
//!
//! - [`todo`]: Task items and the item store
//! - [`signal`]: Notifications and the confirmation prompt
//! - [`storage`]: Key/value persistence boundary
//! - [`ids`]: Identifier generation
//! - [`timestamp`]: Millisecond timestamps
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use tasklist_core::{
//!     signal::{adapters::ManualDismissScheduler, services::SignalStore},
//!     storage::adapters::InMemoryStorage,
//!     todo::services::ItemStore,
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
//! let signals = SignalStore::new(Arc::new(ManualDismissScheduler::new()), Arc::new(DefaultClock));
//! let mut store = ItemStore::new(
//!     Arc::new(InMemoryStorage::new()),
//!     Arc::new(DefaultClock),
//!     signals.clone(),
//! );
//! store.load().await;
//!
//! let item = store.create("Buy milk").await.expect("valid text");
//! store.toggle(item.id()).await;
//!
//! assert_eq!(store.completed_items().len(), 1);
//! assert_eq!(signals.notifications().len(), 2);
//! # });
//! ```

pub mod ids;
pub mod signal;
pub mod storage;
pub mod timestamp;
pub mod todo;
