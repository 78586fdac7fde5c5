//! Database connection and query utilities for CozoDB.
//!
//! This module provides the storage layer for generated rows:
//! - Connection management (SQLite-backed or in-memory for tests)
//! - The `DatabaseBackend` trait the generator writes through
//! - Schema definitions and the CozoScript compiler
//!
//! # Architecture
//!
//! Every registered model is stored in its own Cozo relation, keyed by an
//! integer `id`. Queries are written in CozoScript and return rows of
//! `DataValue` cells, read back through the `DatabaseValue` trait.

mod backend;
mod config;
mod connection;
mod escape;
pub mod schema;
mod value;

pub use backend::{DatabaseBackend, Params, QueryResult};
pub use config::{DEFAULT_DB_URL, DatabaseConfig};
pub use connection::{CozoBackend, CozoStorage, open_db, open_mem_db};
pub use escape::escape_string;
pub use value::DatabaseValue;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Unexpected value in column '{column}': expected {expected}, got {actual}")]
    UnexpectedValue {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },
}
