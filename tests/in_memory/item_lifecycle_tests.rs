//! In-memory integration tests for the item lifecycle.

use std::sync::Arc;

use super::helpers::{Session, START_MS, storage, texts};
use rstest::rstest;
use tasklist_core::{
    storage::adapters::InMemoryStorage,
    todo::{
        domain::{MAX_TEXT_LENGTH, ValidationError},
        services::{ItemStoreError, messages},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_item_is_trimmed_active_and_announced(
    storage: InMemoryStorage,
) -> Result<(), eyre::Report> {
    let mut session = Session::open(Arc::new(storage));

    let item = session.store.create("  Buy milk  ").await?;

    eyre::ensure!(item.text().as_str() == "Buy milk", "text was not trimmed");
    eyre::ensure!(!item.is_completed(), "new item should be active");
    eyre::ensure!(
        item.created_at().as_millis() == START_MS,
        "creation time should come from the clock"
    );
    eyre::ensure!(item.updated_at() == item.created_at(), "timestamps differ");
    eyre::ensure!(
        texts(&session.store.active_items()) == ["Buy milk"],
        "active view mismatch"
    );
    eyre::ensure!(
        session.messages() == [messages::CREATED],
        "unexpected notifications: {:?}",
        session.messages()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggling_partitions_items_newest_first(
    storage: InMemoryStorage,
) -> Result<(), eyre::Report> {
    let mut session = Session::open(Arc::new(storage));
    let first = session.store.create("A").await?;
    session.store.create("B").await?;
    session.store.create("C").await?;

    session.store.toggle(first.id()).await;

    eyre::ensure!(
        texts(&session.store.active_items()) == ["C", "B"],
        "active view mismatch"
    );
    eyre::ensure!(
        texts(&session.store.completed_items()) == ["A"],
        "completed view mismatch"
    );
    eyre::ensure!(session.store.count() == 3, "count should cover both views");

    let toggled = session
        .store
        .get(first.id())
        .ok_or_else(|| eyre::eyre!("toggled item missing"))?;
    eyre::ensure!(
        toggled.updated_at() > toggled.created_at(),
        "toggle should advance updated_at"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn double_toggle_restores_active_state(storage: InMemoryStorage) -> Result<(), eyre::Report> {
    let mut session = Session::open(Arc::new(storage));
    let item = session.store.create("Water plants").await?;

    session.store.toggle(item.id()).await;
    session.store.toggle(item.id()).await;

    eyre::ensure!(session.store.completed_items().is_empty(), "should be active");
    eyre::ensure!(
        session.messages()
            == [
                messages::CREATED,
                messages::MARKED_COMPLETED,
                messages::MARKED_ACTIVE,
            ],
        "unexpected notifications: {:?}",
        session.messages()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_replaces_text_and_keeps_identity(
    storage: InMemoryStorage,
) -> Result<(), eyre::Report> {
    let mut session = Session::open(Arc::new(storage));
    let item = session.store.create("Draft").await?;

    session.store.update(item.id(), "  Final  ").await?;

    let edited = session
        .store
        .get(item.id())
        .ok_or_else(|| eyre::eyre!("edited item missing"))?;
    eyre::ensure!(edited.text().as_str() == "Final", "text mismatch");
    eyre::ensure!(edited.created_at() == item.created_at(), "created_at changed");
    eyre::ensure!(edited.updated_at() > item.updated_at(), "updated_at not advanced");
    eyre::ensure!(
        session.messages().last().map(String::as_str) == Some(messages::UPDATED),
        "missing update notification"
    );
    Ok(())
}

#[rstest]
#[case("", ValidationError::EmptyText)]
#[case("   \t ", ValidationError::EmptyText)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_text_is_rejected_without_side_effects(
    storage: InMemoryStorage,
    #[case] text: &str,
    #[case] expected: ValidationError,
) -> Result<(), eyre::Report> {
    let shared = Arc::new(storage);
    let mut session = Session::open(Arc::clone(&shared));

    let result = session.store.create(text).await;

    eyre::ensure!(
        result == Err(ItemStoreError::Validation(expected)),
        "unexpected result: {result:?}"
    );
    eyre::ensure!(session.store.count() == 0, "nothing should be created");
    eyre::ensure!(session.messages().is_empty(), "nothing should be announced");
    eyre::ensure!(shared.is_empty(), "nothing should be written");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlong_edit_leaves_item_untouched(storage: InMemoryStorage) -> Result<(), eyre::Report> {
    let mut session = Session::open(Arc::new(storage));
    let item = session.store.create("Short").await?;
    let overlong = "x".repeat(MAX_TEXT_LENGTH + 1);

    let result = session.store.update(item.id(), &overlong).await;

    eyre::ensure!(
        result
            == Err(ItemStoreError::Validation(ValidationError::TooLong {
                actual_length: MAX_TEXT_LENGTH + 1,
            })),
        "unexpected result: {result:?}"
    );
    let unchanged = session
        .store
        .get(item.id())
        .ok_or_else(|| eyre::eyre!("item missing"))?;
    eyre::ensure!(unchanged == &item, "item should be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removing_deletes_only_the_target(storage: InMemoryStorage) -> Result<(), eyre::Report> {
    let mut session = Session::open(Arc::new(storage));
    let keep = session.store.create("Keep").await?;
    let dropped = session.store.create("Drop").await?;

    session.store.remove(dropped.id()).await;
    session.store.remove(dropped.id()).await;

    eyre::ensure!(session.store.items() == [keep], "only the kept item remains");
    eyre::ensure!(
        session.messages()
            == [messages::CREATED, messages::CREATED, messages::REMOVED],
        "second remove should be silent: {:?}",
        session.messages()
    );
    Ok(())
}
