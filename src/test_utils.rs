//! Shared test utilities for execute and generator tests.

use std::io::Write;

use cozo::DataValue;
use tempfile::NamedTempFile;

use crate::db::{DatabaseBackend, DatabaseValue, open_mem_db};
use crate::registry::ModelRegistry;

/// Create a temporary file containing the given content.
///
/// Used to hand schema and config JSON to code that reads from disk.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Parse a schema fixture into a registry.
pub fn registry_from(json: &str) -> ModelRegistry {
    ModelRegistry::from_json_str(json).expect("Fixture schema should be valid")
}

/// Create an in-memory database with relations for every model of `json`.
pub fn setup_test_db(json: &str) -> (ModelRegistry, Box<dyn DatabaseBackend>) {
    let registry = registry_from(json);
    let db = open_mem_db().expect("Failed to create in-memory DB");
    crate::queries::schema::create_schema(db.as_ref(), &registry).expect("Schema creation should succeed");
    (registry, db)
}

/// Every stored row of `relation`, ordered by key, as `(column, value)` pairs.
pub fn stored_rows(db: &dyn DatabaseBackend, relation: &str) -> Vec<Vec<(String, DataValue)>> {
    let columns: Vec<String> = db
        .execute_query_no_params(&format!("::columns {relation}"))
        .expect("Relation should exist")
        .first_column()
        .filter_map(|v| v.as_string())
        .collect();

    let list = columns.join(", ");
    let result = db
        .execute_query_no_params(&format!("?[{list}] := *{relation}{{{list}}}"))
        .expect("Row query should succeed");

    result
        .rows
        .into_iter()
        .map(|row| columns.iter().cloned().zip(row).collect())
        .collect()
}
