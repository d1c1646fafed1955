//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. Both fields are reference-counted, so clones share the same store
//! and the same write locks.

use std::sync::Arc;

use crate::server::{data::store::RecordStore, service::lock::WriteLocks};

#[derive(Clone)]
pub struct AppState {
    /// Backend holding every entity collection.
    ///
    /// Chosen at startup from configuration: JSON files, SQLite or memory.
    pub store: Arc<dyn RecordStore>,

    /// Per-collection locks for uniqueness checks and appointment transitions.
    pub locks: Arc<WriteLocks>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            locks: Arc::new(WriteLocks::new()),
        }
    }
}
