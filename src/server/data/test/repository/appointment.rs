use super::*;
use crate::server::{
    data::appointment::AppointmentRepository,
    model::appointment::{AppointmentPatch, AppointmentStatus},
};

/// Tests reading appointments stored with legacy `_id`, `date` and `time` keys.
///
/// Expected: fields mapped to `id`, `data` and `hora`
#[tokio::test]
async fn normalises_legacy_field_names() {
    let store = MemoryStore::new().with(
        Collection::Appointments,
        [json!({
            "_id": 3,
            "clientId": "1",
            "date": "2025-05-21",
            "time": "14:30",
            "status": "pendente",
            "valorTotal": "70"
        })],
    );
    let repo = AppointmentRepository::new(&store);

    let appointment = repo.get_by_id("3").await.unwrap().unwrap();

    assert_eq!(appointment.id, "3");
    assert_eq!(appointment.data, "2025-05-21");
    assert_eq!(appointment.hora, "14:30");
    assert_eq!(appointment.valor_total, 70.0);
}

/// Tests that canonical keys win over legacy ones.
///
/// Expected: `data` kept when both `data` and `date` are present
#[tokio::test]
async fn canonical_key_wins_over_legacy() {
    let store = MemoryStore::new().with(
        Collection::Appointments,
        [json!({ "id": "1", "data": "2025-06-01", "date": "2020-01-01" })],
    );
    let repo = AppointmentRepository::new(&store);

    let appointment = repo.get_by_id("1").await.unwrap().unwrap();

    assert_eq!(appointment.data, "2025-06-01");
}

/// Tests that unreadable records are skipped when listing.
///
/// Expected: only the readable appointment is returned
#[tokio::test]
async fn skips_unreadable_records() {
    let store = MemoryStore::new().with(
        Collection::Appointments,
        [
            fixture::appointment::document("1", "1", "2025-05-21"),
            json!({ "id": "2", "status": "agendado" }),
        ],
    );
    let repo = AppointmentRepository::new(&store);

    let appointments = repo.get_all().await.unwrap();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, "1");
}

/// Tests an update round trip through the SQLite backend.
///
/// Expected: patched fields changed, status untouched
#[tokio::test]
async fn updates_through_sqlite_store() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_record_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let record = factory::create_appointment(db, "1", "2025-05-21").await?;
    let store = SqliteStore::new(db.clone());
    let repo = AppointmentRepository::new(&store);

    let updated = repo
        .update(
            &record.id,
            &AppointmentPatch {
                hora: Some("16:00".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.hora, "16:00");
    assert_eq!(updated.data, "2025-05-21");
    assert_eq!(updated.status, AppointmentStatus::Pendente);

    Ok(())
}
