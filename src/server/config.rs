use std::path::PathBuf;

use crate::server::error::config::ConfigError;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";

/// Where entity collections are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON array file per collection under `DATA_DIR`.
    File,
    /// The `record` table of the SQLite database at `DATABASE_URL`.
    Sqlite,
    /// Process memory; nothing survives a restart.
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "file" => Some(Self::File),
            "sqlite" => Some(Self::Sqlite),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    pub database_url: Option<String>,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Blank values count as unset. `DATABASE_URL` is only required for the SQLite
    /// backend.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let storage_backend = match var("STORAGE_BACKEND") {
            None => StorageBackend::File,
            Some(value) => {
                StorageBackend::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                    name: "STORAGE_BACKEND".to_string(),
                    value,
                    expected: "file, sqlite or memory".to_string(),
                })?
            }
        };

        let database_url = var("DATABASE_URL");
        if storage_backend == StorageBackend::Sqlite && database_url.is_none() {
            return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()));
        }

        Ok(Self {
            storage_backend,
            data_dir: PathBuf::from(var("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())),
            database_url,
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
