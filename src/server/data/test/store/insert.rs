use super::*;

/// Tests id assignment on an empty collection.
///
/// Expected: first document gets id "1"
#[tokio::test]
async fn assigns_first_id() {
    for_each_backend(|store| async move {
        let stored = store
            .insert(Collection::Clients, doc(json!({ "name": "Ana" })))
            .await
            .unwrap();

        assert_eq!(stored["id"], "1");
        assert_eq!(stored["name"], "Ana");
    })
    .await;
}

/// Tests that ids increase monotonically and ignore caller-provided ids.
///
/// Expected: ids "1", "2", "3" regardless of the `id` in the payload
#[tokio::test]
async fn assigns_increasing_ids() {
    for_each_backend(|store| async move {
        for name in ["Ana", "Bia", "Caio"] {
            store
                .insert(
                    Collection::Clients,
                    doc(json!({ "id": "999", "name": name })),
                )
                .await
                .unwrap();
        }

        let ids: Vec<Value> = store
            .load_all(Collection::Clients)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d["id"].clone())
            .collect();

        assert_eq!(ids, vec![json!("1"), json!("2"), json!("3")]);
    })
    .await;
}

/// Tests that deleted ids below the maximum are not reused.
///
/// Expected: after deleting "1" of ["1", "2"], the next id is "3"
#[tokio::test]
async fn does_not_reuse_ids_below_maximum() {
    for_each_backend(|store| async move {
        store
            .insert(Collection::Procedures, doc(json!({ "nome": "Corte" })))
            .await
            .unwrap();
        store
            .insert(Collection::Procedures, doc(json!({ "nome": "Escova" })))
            .await
            .unwrap();
        store.delete(Collection::Procedures, "1").await.unwrap();

        let stored = store
            .insert(Collection::Procedures, doc(json!({ "nome": "Manicure" })))
            .await
            .unwrap();

        assert_eq!(stored["id"], "3");
    })
    .await;
}

/// Tests that collections keep independent id sequences.
///
/// Expected: first appointment gets id "1" even when clients exist
#[tokio::test]
async fn collections_are_independent() {
    for_each_backend(|store| async move {
        store
            .insert(Collection::Clients, doc(json!({ "name": "Ana" })))
            .await
            .unwrap();
        store
            .insert(Collection::Clients, doc(json!({ "name": "Bia" })))
            .await
            .unwrap();

        let appointment = store
            .insert(Collection::Appointments, doc(json!({ "clientId": "2" })))
            .await
            .unwrap();

        assert_eq!(appointment["id"], "1");
        assert_eq!(store.load_all(Collection::Appointments).await.unwrap().len(), 1);
    })
    .await;
}
