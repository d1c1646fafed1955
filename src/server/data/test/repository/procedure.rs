use super::*;
use crate::server::data::procedure::ProcedureRepository;

/// Tests name lookup over procedures seeded in SQLite by the factory.
///
/// Expected: match ignores case and surrounding whitespace
#[tokio::test]
async fn finds_by_name_ignoring_case() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_record_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let corte = factory::create_procedure(db, "Corte", 50.0).await?;
    factory::create_procedure(db, "Escova", 40.0).await?;
    let store = SqliteStore::new(db.clone());
    let repo = ProcedureRepository::new(&store);

    let found = repo.find_by_name("  corte ").await.unwrap().unwrap();
    let missing = repo.find_by_name("Manicure").await.unwrap();

    assert_eq!(found.id, corte.id);
    assert_eq!(found.preco, 50.0);
    assert!(missing.is_none());

    Ok(())
}

/// Tests reading legacy `name`/`price` keys.
///
/// Expected: values land in `nome` and `preco`
#[tokio::test]
async fn reads_legacy_procedure_keys() {
    let store = MemoryStore::new().with(
        Collection::Procedures,
        [json!({"id": "1", "name": "Corte", "price": "45.5"})],
    );
    let repo = ProcedureRepository::new(&store);

    let procedure = repo.get_by_id("1").await.unwrap().unwrap();

    assert_eq!(procedure.nome, "Corte");
    assert_eq!(procedure.preco, 45.5);
}
