//! Database backend trait for abstracting the row store.
//!
//! The generator only talks to the store through this trait: create a
//! relation per model, insert rows, and run read queries for counts, keys
//! and uniqueness probes.

use std::error::Error;

use cozo::DataValue;

use super::schema::SchemaRelation;
use super::value::DatabaseValue;

/// Type alias for query parameters.
pub type Params = std::collections::BTreeMap<String, DataValue>;

/// Result of a query execution.
///
/// Generic over value type to support different database backends.
/// Defaults to `cozo::DataValue` for the CozoDB backend.
#[derive(Debug, Clone)]
pub struct QueryResult<V: DatabaseValue = DataValue> {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<V>>,
}

impl<V: DatabaseValue> QueryResult<V> {
    /// First cell of the first row, if any.
    pub fn scalar(&self) -> Option<&V> {
        self.rows.first().and_then(|row| row.first())
    }

    /// First cell of every row.
    pub fn first_column(&self) -> impl Iterator<Item = &V> {
        self.rows.iter().filter_map(|row| row.first())
    }
}

/// Trait for database backends that can execute queries.
pub trait DatabaseBackend: Send + Sync {
    /// Execute a query with parameters, returning raw rows.
    fn execute_query(
        &self,
        script: &str,
        params: &Params,
    ) -> Result<QueryResult<DataValue>, Box<dyn Error>>;

    /// Execute a query without parameters.
    fn execute_query_no_params(
        &self,
        script: &str,
    ) -> Result<QueryResult<DataValue>, Box<dyn Error>> {
        self.execute_query(script, &Params::new())
    }

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Check if a relation (table) exists.
    fn relation_exists(&self, name: &str) -> Result<bool, Box<dyn Error>>;

    /// Create a relation if it doesn't exist.
    /// Returns true if created, false if already existed.
    fn try_create_relation(&self, relation: &SchemaRelation) -> Result<bool, Box<dyn Error>>;

    /// Insert rows into a relation/table.
    ///
    /// Each row holds one value per field of `relation`, key fields first.
    /// Returns the number of rows inserted.
    fn insert_rows(
        &self,
        relation: &SchemaRelation,
        rows: Vec<Vec<DataValue>>,
    ) -> Result<usize, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozo::Num;

    #[test]
    fn test_query_result_scalar() {
        let result: QueryResult<DataValue> = QueryResult {
            headers: vec!["count(id)".to_string()],
            rows: vec![vec![DataValue::Num(Num::Int(3))]],
        };
        assert_eq!(result.scalar().and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn test_query_result_empty() {
        let result: QueryResult<DataValue> = QueryResult {
            headers: vec!["id".to_string()],
            rows: vec![],
        };
        assert!(result.scalar().is_none());
        assert_eq!(result.first_column().count(), 0);
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn accepts_backend(_db: &dyn DatabaseBackend) {}
        let _ = accepts_backend;
    }
}
