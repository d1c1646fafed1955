//! JSON file backend.
//!
//! Each collection lives in its own pretty-printed JSON array under the data directory.
//! Writes go to a temporary sibling file which is then renamed over the collection
//! file, so readers never observe a partially written array.

use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::server::{
    data::store::{assign_id, merge, next_id, record_id, Collection, Document, RecordStore},
    error::store::StoreError,
};

pub struct JsonFileStore {
    dir: PathBuf,
    locks: [Mutex<()>; 5],
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locks: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }

    async fn read(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let path = self.path(collection);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            collection: collection.name(),
            source,
        })
    }

    async fn write(&self, collection: Collection, documents: &[Document]) -> Result<(), StoreError> {
        let path = self.path(collection);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StoreError::Io {
                path: self.dir.clone(),
                source,
            })?;

        let bytes = serde_json::to_vec_pretty(documents).map_err(|source| StoreError::Malformed {
            collection: collection.name(),
            source,
        })?;

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;

        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| StoreError::Io { path, source })
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        self.read(collection).await
    }

    async fn insert(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<Document, StoreError> {
        let _guard = self.locks[collection.index()].lock().await;

        let mut documents = self.read(collection).await?;
        assign_id(&mut document, next_id(&documents));
        documents.push(document.clone());
        self.write(collection, &documents).await?;

        tracing::debug!(
            "Inserted {} record {:?}",
            collection.name(),
            record_id(&document)
        );

        Ok(document)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: Document,
    ) -> Result<Option<Document>, StoreError> {
        let _guard = self.locks[collection.index()].lock().await;

        let mut documents = self.read(collection).await?;
        let Some(existing) = documents
            .iter_mut()
            .find(|doc| record_id(doc).as_deref() == Some(id))
        else {
            return Ok(None);
        };

        merge(existing, partial);
        let updated = existing.clone();
        self.write(collection, &documents).await?;

        Ok(Some(updated))
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let _guard = self.locks[collection.index()].lock().await;

        let mut documents = self.read(collection).await?;
        let before = documents.len();
        documents.retain(|doc| record_id(doc).as_deref() != Some(id));

        if documents.len() == before {
            return Ok(false);
        }

        self.write(collection, &documents).await?;

        Ok(true)
    }
}
