//! SQLite backend storing each document as a row of the `record` table.
//!
//! Rows are keyed by `(collection, id)` and hold the JSON document in `body`. Inserts
//! and updates run inside a database transaction while holding the collection's write
//! lock, so id assignment and read-merge-write cycles cannot interleave.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, TransactionTrait,
};
use tokio::sync::Mutex;

use crate::server::{
    data::store::{assign_id, merge, next_id, sort_by_id, Collection, Document, RecordStore},
    error::store::StoreError,
};

pub struct SqliteStore {
    db: DatabaseConnection,
    locks: [Mutex<()>; 5],
}

impl SqliteStore {
    /// Wraps a connection whose schema has already been migrated.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            locks: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    async fn rows<C: ConnectionTrait>(
        conn: &C,
        collection: Collection,
    ) -> Result<Vec<Document>, StoreError> {
        let rows = entity::prelude::Record::find()
            .filter(entity::record::Column::Collection.eq(collection.name()))
            .all(conn)
            .await?;

        let mut documents = rows
            .into_iter()
            .map(|row| parse_body(collection, &row.body))
            .collect::<Result<Vec<_>, _>>()?;
        sort_by_id(&mut documents);

        Ok(documents)
    }
}

fn parse_body(collection: Collection, body: &str) -> Result<Document, StoreError> {
    serde_json::from_str(body).map_err(|source| StoreError::Malformed {
        collection: collection.name(),
        source,
    })
}

fn to_body(collection: Collection, document: &Document) -> Result<String, StoreError> {
    serde_json::to_string(document).map_err(|source| StoreError::Malformed {
        collection: collection.name(),
        source,
    })
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn load_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        Self::rows(&self.db, collection).await
    }

    async fn insert(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<Document, StoreError> {
        let _guard = self.locks[collection.index()].lock().await;
        let txn = self.db.begin().await?;

        let existing = Self::rows(&txn, collection).await?;
        let id = next_id(&existing);
        assign_id(&mut document, id.clone());

        entity::record::ActiveModel {
            collection: ActiveValue::Set(collection.name().to_string()),
            id: ActiveValue::Set(id),
            body: ActiveValue::Set(to_body(collection, &document)?),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(document)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: Document,
    ) -> Result<Option<Document>, StoreError> {
        let _guard = self.locks[collection.index()].lock().await;
        let txn = self.db.begin().await?;

        let Some(row) =
            entity::prelude::Record::find_by_id((collection.name().to_string(), id.to_string()))
                .one(&txn)
                .await?
        else {
            return Ok(None);
        };

        let mut document = parse_body(collection, &row.body)?;
        merge(&mut document, partial);

        entity::record::ActiveModel {
            collection: ActiveValue::Unchanged(row.collection),
            id: ActiveValue::Unchanged(row.id),
            body: ActiveValue::Set(to_body(collection, &document)?),
        }
        .update(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(document))
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let _guard = self.locks[collection.index()].lock().await;

        let result =
            entity::prelude::Record::delete_by_id((collection.name().to_string(), id.to_string()))
                .exec(&self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }
}
