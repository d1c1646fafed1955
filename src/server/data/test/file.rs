//! JSON file backend specifics: file layout, legacy data and corrupt files.

use super::*;
use crate::server::{data::store::JsonFileStore, error::store::StoreError};

/// Tests that a missing data directory is not an error.
///
/// Expected: Ok with no documents
#[tokio::test]
async fn missing_directory_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("does-not-exist"));

    let docs = store.load_all(Collection::Appointments).await.unwrap();

    assert!(docs.is_empty());
}

/// Tests that writes land in the legacy file name as a pretty-printed array.
///
/// Expected: `clientes_db.json` holds the inserted client, no temp file remains
#[tokio::test]
async fn writes_collection_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store
        .insert(Collection::Clients, doc(json!({ "name": "Ana" })))
        .await
        .unwrap();

    let contents = std::fs::read_to_string(dir.path().join("clientes_db.json")).unwrap();
    let parsed: Vec<Value> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, vec![json!({ "name": "Ana", "id": "1" })]);
    assert!(contents.contains('\n'));
    assert!(!dir.path().join("clientes_db.json.tmp").exists());
}

/// Tests id assignment over legacy records keyed by `_id`.
///
/// Expected: next id continues after the largest legacy `_id`
#[tokio::test]
async fn continues_after_legacy_ids() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("agendamentos.json"),
        r#"[{"_id":"4","date":"2025-05-20"},{"_id":"9","date":"2025-05-21"}]"#,
    )
    .unwrap();
    let store = JsonFileStore::new(dir.path());

    let stored = store
        .insert(Collection::Appointments, doc(json!({ "data": "2025-05-22" })))
        .await
        .unwrap();
    let updated = store
        .update(Collection::Appointments, "4", doc(json!({ "hora": "09:00" })))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored["id"], "10");
    assert_eq!(updated["_id"], "4");
    assert_eq!(updated["hora"], "09:00");
}

/// Tests that corrupt JSON surfaces as a storage error.
///
/// Expected: Err(StoreError::Malformed) on load and on insert
#[tokio::test]
async fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("transacoes.json"), "[{ not json").unwrap();
    let store = JsonFileStore::new(dir.path());

    let loaded = store.load_all(Collection::Transactions).await;
    let inserted = store
        .insert(Collection::Transactions, doc(json!({ "tipo": "receita" })))
        .await;

    assert!(matches!(loaded, Err(StoreError::Malformed { .. })));
    assert!(matches!(inserted, Err(StoreError::Malformed { .. })));
}

/// Tests that an empty file counts as an empty collection.
///
/// Expected: Ok with no documents
#[tokio::test]
async fn blank_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("users.json"), "\n").unwrap();
    let store = JsonFileStore::new(dir.path());

    assert!(store.load_all(Collection::Users).await.unwrap().is_empty());
}

/// Tests that concurrent inserts never assign the same id.
///
/// Expected: 20 distinct ids "1" through "20"
#[tokio::test]
async fn concurrent_inserts_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(JsonFileStore::new(dir.path()));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .insert(Collection::Clients, doc(json!({ "name": format!("c{}", i) })))
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let mut ids: Vec<u64> = store
        .load_all(Collection::Clients)
        .await
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap().parse().unwrap())
        .collect();
    ids.sort();

    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
}
