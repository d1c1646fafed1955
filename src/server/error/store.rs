use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by record store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing a collection file failed.
    ///
    /// A missing file is not an error; the collection is treated as empty.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Collection data is not a JSON array of objects.
    #[error("Malformed data in collection '{collection}': {source}")]
    Malformed {
        /// Name of the collection
        collection: &'static str,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Database error from the SQLite backend.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
