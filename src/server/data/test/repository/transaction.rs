use super::*;
use crate::server::data::transaction::TransactionRepository;

/// Tests finding the revenue transaction of an appointment.
///
/// Expected: only a receita with origem agendamento and matching origemId qualifies
#[tokio::test]
async fn finds_revenue_for_appointment() {
    let store = MemoryStore::new().with(
        Collection::Transactions,
        [
            fixture::transaction::document("1", "receita", 50.0, "2025-05-21"),
            json!({
                "id": "2",
                "tipo": "despesa",
                "valor": 10,
                "origem": "agendamento",
                "origemId": "5"
            }),
            fixture::transaction::appointment_revenue("3", "5", 50.0, "2025-05-21"),
        ],
    );
    let repo = TransactionRepository::new(&store);

    let found = repo.find_revenue_for("5", None).await.unwrap();
    let missing = repo.find_revenue_for("6", None).await.unwrap();
    let excluded = repo.find_revenue_for("5", Some("3")).await.unwrap();

    assert_eq!(found.map(|t| t.id), Some("3".to_string()));
    assert!(missing.is_none());
    assert!(excluded.is_none());
}

/// Tests reading transactions seeded in SQLite by the factory.
///
/// Expected: category defaults and numeric amount preserved
#[tokio::test]
async fn reads_factory_transactions() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_record_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let record = factory::create_transaction(db, "despesa", 40.0, "2025-05-21").await?;
    let store = SqliteStore::new(db.clone());
    let repo = TransactionRepository::new(&store);

    let transaction = repo.get_by_id(&record.id).await.unwrap().unwrap();

    assert_eq!(transaction.valor, 40.0);
    assert_eq!(transaction.categoria, "Outros");
    assert_eq!(transaction.origem_id, None);

    Ok(())
}
