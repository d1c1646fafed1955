use super::*;

/// Tests deleting an existing document.
///
/// Expected: Ok(true) and the document is gone
#[tokio::test]
async fn deletes_existing_document() {
    for_each_backend(|store| async move {
        store
            .insert(Collection::Transactions, doc(json!({ "tipo": "receita" })))
            .await
            .unwrap();
        store
            .insert(Collection::Transactions, doc(json!({ "tipo": "despesa" })))
            .await
            .unwrap();

        assert!(store.delete(Collection::Transactions, "1").await.unwrap());

        let remaining = store.load_all(Collection::Transactions).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0]["id"], "2");
    })
    .await;
}

/// Tests deleting from an empty collection.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() {
    for_each_backend(|store| async move {
        assert!(!store.delete(Collection::Users, "1").await.unwrap());
    })
    .await;
}
