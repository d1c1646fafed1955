//! Record store: key-value-by-id persistence for the entity collections.
//!
//! Every collection is an ordered sequence of JSON documents keyed by a string `id`.
//! The `RecordStore` trait is the seam between repositories and storage, with three
//! interchangeable backends:
//!
//! - `JsonFileStore` - one pretty-printed JSON array file per collection
//! - `SqliteStore` - the SeaORM `record` table, one row per document
//! - `MemoryStore` - process-local vectors, used by tests
//!
//! Id assignment and the shallow-merge update rule are shared by all backends through
//! the helpers in this module. Writes are serialised per collection by each backend.

pub mod file;
pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{model::lenient, server::error::store::StoreError};

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A stored record.
pub type Document = Map<String, Value>;

/// Entity collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Clients,
    Procedures,
    Appointments,
    Transactions,
    Users,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Clients,
        Collection::Procedures,
        Collection::Appointments,
        Collection::Transactions,
        Collection::Users,
    ];

    /// Collection key used by the database backend and in log messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Procedures => "procedures",
            Self::Appointments => "appointments",
            Self::Transactions => "transactions",
            Self::Users => "users",
        }
    }

    /// File name used by the JSON file backend, compatible with existing data directories.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Clients => "clientes_db.json",
            Self::Procedures => "procedures.json",
            Self::Appointments => "agendamentos.json",
            Self::Transactions => "transacoes.json",
            Self::Users => "users.json",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Persistence contract shared by all storage backends.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Loads every document of a collection in storage order.
    ///
    /// Missing backing storage is not an error and yields an empty vector.
    async fn load_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// Inserts a document, assigning it the next id.
    ///
    /// Any `id` present in `document` is replaced.
    ///
    /// # Returns
    /// - `Ok(Document)` - The stored document including its assigned `id`
    async fn insert(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<Document, StoreError>;

    /// Shallow-merges `partial` over the document with `id`.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - The updated document
    /// - `Ok(None)` - No document with that id exists
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Removes the document with `id`.
    ///
    /// # Returns
    /// - `Ok(true)` - The document was removed
    /// - `Ok(false)` - No document with that id exists
    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError>;
}

/// Reads a document's id, accepting the legacy `_id` key and numeric ids.
pub fn record_id(document: &Document) -> Option<String> {
    document
        .get("id")
        .or_else(|| document.get("_id"))
        .and_then(lenient::value_to_text)
}

/// Numeric value of an id, reading leading digits only. Non-numeric ids count as 0.
pub fn numeric_id(id: &str) -> u64 {
    let digits: String = id
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or(0)
}

/// Next id for a collection: one more than the largest numeric id, or `1` when empty.
pub fn next_id(documents: &[Document]) -> String {
    let max = documents
        .iter()
        .filter_map(record_id)
        .map(|id| numeric_id(&id))
        .max()
        .unwrap_or(0);

    (max + 1).to_string()
}

/// Sets the canonical `id` key, dropping any legacy `_id`.
pub fn assign_id(document: &mut Document, id: String) {
    document.remove("_id");
    document.insert("id".to_string(), Value::String(id));
}

/// Shallow-merges `partial` into `existing`, never touching the id.
pub fn merge(existing: &mut Document, partial: Document) {
    for (key, value) in partial {
        if key == "id" || key == "_id" {
            continue;
        }
        existing.insert(key, value);
    }
}

/// Orders documents by numeric id, then by raw id.
pub(crate) fn sort_by_id(documents: &mut [Document]) {
    documents.sort_by_cached_key(|doc| {
        let id = record_id(doc).unwrap_or_default();
        (numeric_id(&id), id)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), "1");
    }

    #[test]
    fn next_id_uses_largest_numeric_id() {
        let docs = vec![
            doc(json!({ "id": "2" })),
            doc(json!({ "_id": 10 })),
            doc(json!({ "id": "abc" })),
            doc(json!({ "name": "no id" })),
        ];

        assert_eq!(next_id(&docs), "11");
    }

    #[test]
    fn numeric_id_reads_leading_digits() {
        assert_eq!(numeric_id("12abc"), 12);
        assert_eq!(numeric_id("abc"), 0);
        assert_eq!(numeric_id(""), 0);
    }

    #[test]
    fn merge_keeps_existing_id() {
        let mut existing = doc(json!({ "id": "1", "name": "Ana" }));
        merge(
            &mut existing,
            doc(json!({ "id": "99", "_id": "98", "name": "Ana Paula" })),
        );

        assert_eq!(existing["id"], "1");
        assert_eq!(existing["name"], "Ana Paula");
        assert!(!existing.contains_key("_id"));
    }

    #[test]
    fn record_id_reads_legacy_key() {
        assert_eq!(record_id(&doc(json!({ "_id": 3 }))), Some("3".to_string()));
        assert_eq!(record_id(&doc(json!({}))), None);
    }
}
