use super::*;
use crate::server::data::user::UserRepository;

fn store_with_joao() -> MemoryStore {
    MemoryStore::new().with(
        Collection::Users,
        [json!({
            "id": "1",
            "username": "joao",
            "email": "joao@example.com",
            "password": "$2b$04$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW"
        })],
    )
}

/// Tests duplicate detection on username or email.
///
/// Expected: true for same username or same email in any case, false otherwise
#[tokio::test]
async fn detects_existing_username_or_email() {
    let store = store_with_joao();
    let repo = UserRepository::new(&store);

    assert!(repo.exists("joao", "other@example.com").await.unwrap());
    assert!(repo.exists("maria", "JOAO@example.com").await.unwrap());
    assert!(!repo.exists("maria", "maria@example.com").await.unwrap());
}

/// Tests username lookup.
///
/// Expected: exact match only
#[tokio::test]
async fn finds_by_exact_username() {
    let store = store_with_joao();
    let repo = UserRepository::new(&store);

    assert!(repo.find_by_username("joao").await.unwrap().is_some());
    assert!(repo.find_by_username("Joao").await.unwrap().is_none());
}
