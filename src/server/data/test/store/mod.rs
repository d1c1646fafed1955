//! Behaviour shared by every `RecordStore` backend.
//!
//! Each check is written once against `&dyn RecordStore` and run for the memory, file
//! and SQLite backends.

use super::*;
use crate::server::data::store::{JsonFileStore, MemoryStore, SqliteStore};
use test_utils::builder::TestBuilder;

mod delete;
mod insert;
mod update;

/// Runs `check` against a fresh instance of every backend.
async fn for_each_backend<F, Fut>(check: F)
where
    F: Fn(Box<dyn RecordStore>) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    check(Box::new(MemoryStore::new())).await;

    let dir = tempfile::tempdir().unwrap();
    check(Box::new(JsonFileStore::new(dir.path()))).await;

    let test = TestBuilder::new().with_record_table().build().await.unwrap();
    let db = test.db.clone().unwrap();
    check(Box::new(SqliteStore::new(db))).await;
}

/// Tests that loading an empty collection succeeds.
///
/// Expected: Ok with no documents on every backend
#[tokio::test]
async fn empty_collection_loads_as_empty() {
    for_each_backend(|store| async move {
        let docs = store.load_all(Collection::Clients).await.unwrap();
        assert!(docs.is_empty());
    })
    .await;
}
