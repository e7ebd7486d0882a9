//! Price history persistence configuration.

use serde::{Deserialize, Serialize};

/// Which history store to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// Process-local, lost on exit.
    Memory,
    /// DuckDB file at `db_path`.
    #[default]
    Duckdb,
}

/// History persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Store backend.
    #[serde(default)]
    pub backend: PersistenceBackend,
    /// Database path for the DuckDB backend.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::default(),
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    "./data/prices.duckdb".to_string()
}
