//! In-process backend keeping each collection in a vector.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::server::{
    data::store::{assign_id, merge, next_id, record_id, Collection, Document, RecordStore},
    error::store::StoreError,
};

pub struct MemoryStore {
    collections: [Mutex<Vec<Document>>; 5],
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: std::array::from_fn(|_| Mutex::new(Vec::new())),
        }
    }

    /// Seeds `collection` with documents, keeping their ids as given.
    ///
    /// Values that are not JSON objects are ignored.
    pub fn with(mut self, collection: Collection, documents: impl IntoIterator<Item = Value>) -> Self {
        let docs = self.collections[collection.index()].get_mut();
        docs.extend(documents.into_iter().filter_map(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        }));
        self
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        Ok(self.collections[collection.index()].lock().await.clone())
    }

    async fn insert(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<Document, StoreError> {
        let mut documents = self.collections[collection.index()].lock().await;

        assign_id(&mut document, next_id(&documents));
        documents.push(document.clone());

        Ok(document)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: Document,
    ) -> Result<Option<Document>, StoreError> {
        let mut documents = self.collections[collection.index()].lock().await;

        Ok(documents
            .iter_mut()
            .find(|doc| record_id(doc).as_deref() == Some(id))
            .map(|existing| {
                merge(existing, partial);
                existing.clone()
            }))
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let mut documents = self.collections[collection.index()].lock().await;

        let before = documents.len();
        documents.retain(|doc| record_id(doc).as_deref() != Some(id));

        Ok(documents.len() != before)
    }
}
