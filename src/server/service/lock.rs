//! Per-collection locks held by services across a check-then-write sequence.
//!
//! Store backends only serialise individual writes. Uniqueness rules (client phone,
//! procedure name, username and email, one revenue transaction per appointment) read
//! the collection before writing, so the service holds the collection's lock for the
//! whole sequence.
//!
//! When two locks are needed they are taken in `Collection` declaration order:
//! appointments before transactions.

use tokio::sync::{Mutex, MutexGuard};

use crate::server::data::store::Collection;

pub struct WriteLocks {
    collections: [Mutex<()>; Collection::ALL.len()],
}

impl WriteLocks {
    pub fn new() -> Self {
        Self {
            collections: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    /// Waits for exclusive write access to `collection`.
    pub async fn lock(&self, collection: Collection) -> MutexGuard<'_, ()> {
        self.collections[collection.index()].lock().await
    }
}

impl Default for WriteLocks {
    fn default() -> Self {
        Self::new()
    }
}
