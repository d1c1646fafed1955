//! Record factory for inserting raw documents into the `record` table.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

use crate::factory::helpers::next_id;

/// Factory for creating `record` rows with customizable fields.
///
/// Defaults:
/// - id: auto-incremented counter value
/// - body: `{}`
///
/// # Example
///
/// ```rust,ignore
/// let record = RecordFactory::new(&db, "clients")
///     .id("3")
///     .body(json!({ "id": "3", "name": "Ana", "phone": "11999998888" }))
///     .build()
///     .await?;
/// ```
pub struct RecordFactory<'a> {
    db: &'a DatabaseConnection,
    collection: String,
    id: String,
    body: Value,
}

impl<'a> RecordFactory<'a> {
    /// Creates a new RecordFactory for `collection` with default values.
    pub fn new(db: &'a DatabaseConnection, collection: &str) -> Self {
        Self {
            db,
            collection: collection.to_string(),
            id: next_id().to_string(),
            body: Value::Object(Default::default()),
        }
    }

    /// Sets the record id.
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the document body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Builds and inserts the record.
    ///
    /// # Returns
    /// - `Ok(entity::record::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::record::Model, DbErr> {
        entity::record::ActiveModel {
            collection: ActiveValue::Set(self.collection),
            id: ActiveValue::Set(self.id),
            body: ActiveValue::Set(self.body.to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Inserts `body` into `collection` under `id`.
///
/// Shorthand for `RecordFactory::new(db, collection).id(id).body(body).build().await`.
pub async fn create_record(
    db: &DatabaseConnection,
    collection: &str,
    id: &str,
    body: Value,
) -> Result<entity::record::Model, DbErr> {
    RecordFactory::new(db, collection)
        .id(id)
        .body(body)
        .build()
        .await
}
