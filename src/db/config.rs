//! Database configuration for runtime backend selection.
//!
//! The database is chosen from, in order: the `--db` flag, the
//! `.seed_data.json` config file, the `DATABASE_URL` environment variable,
//! and finally `./seed_data.sqlite`.

use std::error::Error;
use std::path::PathBuf;

use super::backend::DatabaseBackend;
use super::connection::{open_db, open_mem_db};
use crate::config::{ConfigError, ConfigFile};

/// Default database location when nothing else is configured.
pub const DEFAULT_DB_URL: &str = "./seed_data.sqlite";

/// Configuration for database backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// Local CozoDB with SQLite storage.
    CozoSqlite { path: PathBuf },

    /// Local CozoDB with in-memory storage. Data is lost on exit.
    CozoMem,
}

impl DatabaseConfig {
    /// Create a backend instance from this configuration.
    pub fn connect(&self) -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
        match self {
            Self::CozoSqlite { path } => open_db(path),
            Self::CozoMem => open_mem_db(),
        }
    }

    /// Parse from a connection URL or file path.
    ///
    /// Supported formats:
    /// - `./path/to/db.sqlite` or `/absolute/path` → CozoSqlite
    /// - `sqlite:///path/to/db` → CozoSqlite
    /// - `:memory:` or `mem://` → CozoMem
    pub fn from_url(url: &str) -> Result<Self, Box<dyn Error>> {
        if url == ":memory:" || url == "mem://" {
            return Ok(Self::CozoMem);
        }

        if let Some(path) = url.strip_prefix("sqlite://") {
            return Ok(Self::CozoSqlite {
                path: PathBuf::from(path),
            });
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(ConfigError::UnsupportedUrl {
                url: url.to_string(),
                scheme: scheme.to_string(),
            }
            .into());
        }

        Ok(Self::CozoSqlite {
            path: PathBuf::from(url),
        })
    }

    /// Resolve the configuration from the CLI flag, config file and environment.
    pub fn resolve(cli_url: Option<&str>, config: Option<&ConfigFile>) -> Result<Self, Box<dyn Error>> {
        Self::resolve_with(cli_url, config, std::env::var("DATABASE_URL").ok())
    }

    fn resolve_with(
        cli_url: Option<&str>,
        config: Option<&ConfigFile>,
        env_url: Option<String>,
    ) -> Result<Self, Box<dyn Error>> {
        if let Some(url) = cli_url {
            return Self::from_url(url);
        }

        if let Some(database) = config.and_then(|c| c.database.as_ref()) {
            return Ok(database.to_database_config());
        }

        if let Some(url) = env_url {
            return Self::from_url(&url);
        }

        Self::from_url(DEFAULT_DB_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfigFile;
    use rstest::rstest;

    #[rstest]
    #[case("./test.sqlite", DatabaseConfig::CozoSqlite { path: PathBuf::from("./test.sqlite") })]
    #[case("/tmp/test.sqlite", DatabaseConfig::CozoSqlite { path: PathBuf::from("/tmp/test.sqlite") })]
    #[case("sqlite:///tmp/test.db", DatabaseConfig::CozoSqlite { path: PathBuf::from("/tmp/test.db") })]
    #[case(":memory:", DatabaseConfig::CozoMem)]
    #[case("mem://", DatabaseConfig::CozoMem)]
    fn test_from_url(#[case] url: &str, #[case] expected: DatabaseConfig) {
        assert_eq!(DatabaseConfig::from_url(url).unwrap(), expected);
    }

    #[rstest]
    #[case("postgres://localhost/test")]
    #[case("rocksdb:///tmp/test.db")]
    fn test_from_url_unsupported(#[case] url: &str) {
        let err = DatabaseConfig::from_url(url).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnsupportedUrl { .. })
        ));
        assert!(err.to_string().contains("Unsupported database URL scheme"));
    }

    #[rstest]
    fn test_connect_mem() {
        let backend = DatabaseConfig::CozoMem.connect().unwrap();
        assert_eq!(backend.backend_name(), "CozoMem");
    }

    #[rstest]
    fn test_connect_sqlite() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let config = DatabaseConfig::CozoSqlite {
            path: tmp.path().to_path_buf(),
        };
        assert_eq!(config.connect().unwrap().backend_name(), "CozoSqlite");
    }

    #[rstest]
    fn test_resolve_cli_wins() {
        let config = ConfigFile {
            database: Some(DatabaseConfigFile::Mem),
            schema: None,
        };
        let resolved = DatabaseConfig::resolve_with(
            Some("./cli.sqlite"),
            Some(&config),
            Some("./env.sqlite".to_string()),
        )
        .unwrap();
        assert_eq!(
            resolved,
            DatabaseConfig::CozoSqlite {
                path: PathBuf::from("./cli.sqlite")
            }
        );
    }

    #[rstest]
    fn test_resolve_config_file_before_env() {
        let config = ConfigFile {
            database: Some(DatabaseConfigFile::Mem),
            schema: None,
        };
        let resolved =
            DatabaseConfig::resolve_with(None, Some(&config), Some("./env.sqlite".to_string()))
                .unwrap();
        assert_eq!(resolved, DatabaseConfig::CozoMem);
    }

    #[rstest]
    fn test_resolve_env_before_default() {
        let resolved =
            DatabaseConfig::resolve_with(None, None, Some(":memory:".to_string())).unwrap();
        assert_eq!(resolved, DatabaseConfig::CozoMem);
    }

    #[rstest]
    fn test_resolve_default() {
        let resolved = DatabaseConfig::resolve_with(None, None, None).unwrap();
        assert_eq!(
            resolved,
            DatabaseConfig::CozoSqlite {
                path: PathBuf::from(DEFAULT_DB_URL)
            }
        );
    }
}
