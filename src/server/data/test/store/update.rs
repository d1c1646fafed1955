use super::*;

/// Tests a shallow merge over an existing document.
///
/// Expected: given keys replaced, other keys kept, id untouched
#[tokio::test]
async fn merges_partial_document() {
    for_each_backend(|store| async move {
        store
            .insert(
                Collection::Clients,
                doc(json!({ "name": "Ana", "phone": "11999998888" })),
            )
            .await
            .unwrap();

        let updated = store
            .update(
                Collection::Clients,
                "1",
                doc(json!({ "id": "42", "name": "Ana Paula" })),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated["id"], "1");
        assert_eq!(updated["name"], "Ana Paula");
        assert_eq!(updated["phone"], "11999998888");

        let reloaded = store.load_all(Collection::Clients).await.unwrap();
        assert_eq!(reloaded[0]["name"], "Ana Paula");
    })
    .await;
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None) and the collection is unchanged
#[tokio::test]
async fn returns_none_for_unknown_id() {
    for_each_backend(|store| async move {
        let result = store
            .update(Collection::Clients, "7", doc(json!({ "name": "Ghost" })))
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(store.load_all(Collection::Clients).await.unwrap().is_empty());
    })
    .await;
}
