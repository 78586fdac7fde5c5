//! Configuration file handling.
//!
//! This module provides loading and parsing of the `.seed_data.json`
//! configuration file. Both sections are optional; anything left out falls
//! back to CLI flags, environment variables or defaults.
//!
//! ```json
//! {
//!   "database": { "type": "sqlite", "path": "./seed_data.sqlite" },
//!   "schema": "./models.json"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DatabaseConfig;

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".seed_data.json";

/// Schema file used when neither the CLI nor the config file names one.
pub const DEFAULT_SCHEMA_PATH: &str = "./models.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },

    #[error("Unsupported database URL scheme '{scheme}://' in {url}")]
    UnsupportedUrl { url: String, scheme: String },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database configuration
    #[serde(default)]
    pub database: Option<DatabaseConfigFile>,

    /// Path to the model schema file
    #[serde(default)]
    pub schema: Option<PathBuf>,
}

/// Database configuration variants for different backends.
///
/// JSON format uses a "type" field with lowercase variant names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    /// SQLite backend with file path
    Sqlite { path: PathBuf },
    /// In-memory backend
    #[serde(rename = "memory")]
    Mem,
}

impl ConfigFile {
    /// Load `.seed_data.json` from the current directory.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = Path::new(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    /// Load a configuration file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Resolve the schema path: CLI flag, then this file, then the default.
    pub fn schema_path(config: Option<&Self>, cli_schema: Option<&Path>) -> PathBuf {
        cli_schema
            .map(Path::to_path_buf)
            .or_else(|| config.and_then(|c| c.schema.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH))
    }
}

impl DatabaseConfigFile {
    /// Convert this configuration to a DatabaseConfig.
    pub fn to_database_config(&self) -> DatabaseConfig {
        match self {
            Self::Sqlite { path } => DatabaseConfig::CozoSqlite { path: path.clone() },
            Self::Mem => DatabaseConfig::CozoMem,
        }
    }
}
