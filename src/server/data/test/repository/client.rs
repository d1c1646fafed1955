use super::*;
use crate::server::{data::client::ClientRepository, model::client::CreateClientParams};

/// Tests phone lookup against formatted legacy phone numbers.
///
/// Expected: the client whose digits match is found
#[tokio::test]
async fn finds_by_normalised_phone() {
    let store = MemoryStore::new().with(
        Collection::Clients,
        [
            fixture::client::document("1", "Ana", "(11) 99999-8888"),
            fixture::client::document("2", "Bia", "11 3333-4444"),
        ],
    );
    let repo = ClientRepository::new(&store);

    let found = repo.find_by_phone("1133334444", None).await.unwrap();

    assert_eq!(found.map(|c| c.name), Some("Bia".to_string()));
}

/// Tests that the excluded client is ignored by the phone lookup.
///
/// Expected: None when only the excluded client has the phone
#[tokio::test]
async fn phone_lookup_excludes_given_client() {
    let store = MemoryStore::new().with(
        Collection::Clients,
        [fixture::client::document("1", "Ana", "11999998888")],
    );
    let repo = ClientRepository::new(&store);

    let found = repo.find_by_phone("11999998888", Some("1")).await.unwrap();

    assert!(found.is_none());
}

/// Tests creating clients in the SQLite backend after factory-inserted rows.
///
/// Expected: new id continues after the existing maximum
#[tokio::test]
async fn creates_after_existing_rows() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_record_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_record(
        db,
        "clients",
        "7",
        fixture::client::document("7", "Ana", "11999998888"),
    )
    .await?;
    let store = SqliteStore::new(db.clone());
    let repo = ClientRepository::new(&store);

    let client = repo
        .create(&CreateClientParams {
            name: "Bia".to_string(),
            phone: "1133334444".to_string(),
            email: None,
        })
        .await
        .unwrap();

    assert_eq!(client.id, "8");
    assert_eq!(repo.get_all().await.unwrap().len(), 2);

    Ok(())
}

/// Tests phone lookup over clients seeded in SQLite by the factory.
///
/// Expected: the factory client is found by its digits
#[tokio::test]
async fn finds_factory_client_by_phone() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_record_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ana = factory::create_client(db, "Ana", "11999998888").await?;
    factory::create_client(db, "Bia", "1133334444").await?;
    let store = SqliteStore::new(db.clone());
    let repo = ClientRepository::new(&store);

    let found = repo.find_by_phone("11999998888", None).await.unwrap();

    assert_eq!(found.map(|c| c.id), Some(ana.id));

    Ok(())
}
