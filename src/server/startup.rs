use std::sync::Arc;

use crate::server::{
    config::{Config, StorageBackend},
    data::store::{JsonFileStore, MemoryStore, RecordStore, SqliteStore},
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `database_url` - SQLite connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the record store selected by configuration.
///
/// The file backend creates its directory lazily on first write, so a fresh
/// `DATA_DIR` starts with empty collections.
///
/// # Returns
/// - `Ok(Arc<dyn RecordStore>)` - Store ready to be placed in `AppState`
/// - `Err(AppError)` - Missing database URL, or database connection or migration failure
pub async fn connect_to_store(config: &Config) -> Result<Arc<dyn RecordStore>, AppError> {
    let store: Arc<dyn RecordStore> = match config.storage_backend {
        StorageBackend::File => {
            tracing::info!("Using JSON file store in {}", config.data_dir.display());
            Arc::new(JsonFileStore::new(config.data_dir.clone()))
        }
        StorageBackend::Sqlite => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
            tracing::info!("Using SQLite store");
            Arc::new(SqliteStore::new(connect_to_database(url).await?))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(store)
}
