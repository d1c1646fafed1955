use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::server::{
    data::store::{record_id, Collection, Document, RecordStore},
    error::store::StoreError,
};

/// Domain model persisted as a document in one store collection.
pub trait Record: DeserializeOwned {
    const COLLECTION: Collection;

    /// Rewrites legacy field names of a stored document to the canonical schema.
    ///
    /// The `_id` key is handled for every collection before this runs.
    fn normalize(_document: &mut Document) {}
}

/// Moves `legacy` to `canonical` unless the canonical key already holds a value.
pub fn rename_legacy(document: &mut Document, legacy: &str, canonical: &str) {
    if let Some(value) = document.remove(legacy) {
        let has_canonical = document
            .get(canonical)
            .map(|v| !v.is_null())
            .unwrap_or(false);

        if !has_canonical {
            document.insert(canonical.to_string(), value);
        }
    }
}

/// Typed repository over one collection of the record store.
pub struct DocumentRepository<'a, T> {
    store: &'a dyn RecordStore,
    _record: PhantomData<T>,
}

impl<'a, T: Record> DocumentRepository<'a, T> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    fn read(mut document: Document) -> Result<T, serde_json::Error> {
        rename_legacy(&mut document, "_id", "id");
        T::normalize(&mut document);
        serde_json::from_value(Value::Object(document))
    }

    fn read_stored(document: Document) -> Result<T, StoreError> {
        Self::read(document).map_err(|source| StoreError::Malformed {
            collection: T::COLLECTION.name(),
            source,
        })
    }

    fn to_document<P: Serialize>(params: &P) -> Result<Document, StoreError> {
        let malformed = |source: serde_json::Error| StoreError::Malformed {
            collection: T::COLLECTION.name(),
            source,
        };

        match serde_json::to_value(params).map_err(malformed)? {
            Value::Object(document) => Ok(document),
            _ => Err(malformed(serde::ser::Error::custom(
                "record parameters must serialize to an object",
            ))),
        }
    }

    /// Gets every readable record of the collection.
    ///
    /// Documents that cannot be read as `T` are skipped with a warning.
    pub async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let documents = self.store.load_all(T::COLLECTION).await?;

        Ok(documents
            .into_iter()
            .filter_map(|document| {
                let id = record_id(&document);
                match Self::read(document) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(
                            "Skipping unreadable {} record {:?}: {}",
                            T::COLLECTION.name(),
                            id,
                            e
                        );
                        None
                    }
                }
            })
            .collect())
    }

    /// Gets a record by id.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Record found
    /// - `Ok(None)` - No record with that id
    /// - `Err(StoreError::Malformed)` - The record exists but cannot be read
    pub async fn get_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let documents = self.store.load_all(T::COLLECTION).await?;

        documents
            .into_iter()
            .find(|document| record_id(document).as_deref() == Some(id))
            .map(Self::read_stored)
            .transpose()
    }

    /// Stores a new record built from `params` and returns it with its assigned id.
    pub async fn create<P: Serialize>(&self, params: &P) -> Result<T, StoreError> {
        let document = Self::to_document(params)?;
        let stored = self.store.insert(T::COLLECTION, document).await?;

        Self::read_stored(stored)
    }

    /// Applies `patch` to the record with `id`. Returns `None` if it does not exist.
    pub async fn update<P: Serialize>(&self, id: &str, patch: &P) -> Result<Option<T>, StoreError> {
        let partial = Self::to_document(patch)?;

        self.store
            .update(T::COLLECTION, id, partial)
            .await?
            .map(Self::read_stored)
            .transpose()
    }

    /// Deletes the record with `id`. Returns `false` if it does not exist.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete(T::COLLECTION, id).await
    }
}
