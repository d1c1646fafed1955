//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{factory::record::RecordFactory, fixture};

/// Counter for generating unique ids in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts a client document with a fresh id.
pub async fn create_client(
    db: &DatabaseConnection,
    name: &str,
    phone: &str,
) -> Result<entity::record::Model, DbErr> {
    let id = next_id().to_string();
    RecordFactory::new(db, "clients")
        .id(&id)
        .body(fixture::client::document(&id, name, phone))
        .build()
        .await
}

/// Inserts a procedure document with a fresh id.
pub async fn create_procedure(
    db: &DatabaseConnection,
    nome: &str,
    preco: f64,
) -> Result<entity::record::Model, DbErr> {
    let id = next_id().to_string();
    RecordFactory::new(db, "procedures")
        .id(&id)
        .body(fixture::procedure::document(&id, nome, preco))
        .build()
        .await
}

/// Inserts a pending appointment document for `client_id` on `date`.
pub async fn create_appointment(
    db: &DatabaseConnection,
    client_id: &str,
    date: &str,
) -> Result<entity::record::Model, DbErr> {
    let id = next_id().to_string();
    RecordFactory::new(db, "appointments")
        .id(&id)
        .body(fixture::appointment::document(&id, client_id, date))
        .build()
        .await
}

/// Inserts a manual transaction document.
pub async fn create_transaction(
    db: &DatabaseConnection,
    tipo: &str,
    valor: f64,
    data: &str,
) -> Result<entity::record::Model, DbErr> {
    let id = next_id().to_string();
    RecordFactory::new(db, "transactions")
        .id(&id)
        .body(fixture::transaction::document(&id, tipo, valor, data))
        .build()
        .await
}
