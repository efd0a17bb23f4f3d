//! Integration tests running the item store over the filesystem adapter.

use std::sync::Arc;

use super::helpers::{Session, texts};
use camino::Utf8Path;
use mockable::DefaultClock;
use tasklist_core::{
    signal::{adapters::ManualDismissScheduler, services::SignalStore},
    storage::{adapters::FsStorage, ports::KeyValueStorage},
    todo::services::{DEFAULT_STORAGE_KEY, ItemStore, ItemStoreConfig},
};

fn open_storage(dir: &tempfile::TempDir) -> Result<FsStorage, eyre::Report> {
    let path = Utf8Path::from_path(dir.path())
        .ok_or_else(|| eyre::eyre!("temporary directory path is not UTF-8"))?;
    Ok(FsStorage::open(path)?)
}

#[tokio::test(flavor = "multi_thread")]
async fn task_list_survives_reopening_the_directory() -> Result<(), eyre::Report> {
    let dir = tempfile::tempdir()?;
    {
        let mut session = Session::open(Arc::new(open_storage(&dir)?));
        let done = session.store.create("Written to disk").await?;
        session.store.create("Also on disk").await?;
        session.store.toggle(done.id()).await;
        eyre::ensure!(session.store.is_persistence_healthy(), "disk save failed");
    }

    let reopened = Session::restore(Arc::new(open_storage(&dir)?)).await;

    eyre::ensure!(
        texts(&reopened.store.active_items()) == ["Also on disk"],
        "active items not restored"
    );
    eyre::ensure!(
        texts(&reopened.store.completed_items()) == ["Written to disk"],
        "completed items not restored"
    );
    eyre::ensure!(
        dir.path().join(DEFAULT_STORAGE_KEY).is_file(),
        "document should live under the storage key"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn clear_persisted_removes_the_file_only() -> Result<(), eyre::Report> {
    let dir = tempfile::tempdir()?;
    let storage = Arc::new(open_storage(&dir)?);
    let mut session = Session::open(Arc::clone(&storage));
    session.store.create("Ephemeral").await?;

    session.store.clear_persisted().await?;

    eyre::ensure!(session.store.count() == 1, "memory should be untouched");
    eyre::ensure!(
        storage.get(DEFAULT_STORAGE_KEY).await?.is_none(),
        "document should be gone"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unsupported_storage_key_degrades_persistence() -> Result<(), eyre::Report> {
    let dir = tempfile::tempdir()?;
    let signals = SignalStore::new(Arc::new(ManualDismissScheduler::new()), Arc::new(DefaultClock));
    let mut store = ItemStore::with_config(
        Arc::new(open_storage(&dir)?),
        Arc::new(DefaultClock),
        signals,
        ItemStoreConfig::default().with_storage_key("../escape"),
    );

    store.create("Nowhere to go").await?;

    eyre::ensure!(!store.is_persistence_healthy(), "bad key should fail the save");
    eyre::ensure!(store.count() == 1, "memory still holds the item");
    Ok(())
}
