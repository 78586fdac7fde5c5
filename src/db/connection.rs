//! CozoDB backend: SQLite-backed for real runs, in-memory for tests.

use std::error::Error;
use std::path::Path;

use cozo::{DataValue, DbInstance, ScriptMutability};

use super::backend::{DatabaseBackend, Params, QueryResult};
use super::schema::SchemaRelation;
use super::schema::compilers::CozoCompiler;
use super::value::DatabaseValue;
use super::DbError;

/// Storage engine behind a `CozoBackend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CozoStorage {
    Sqlite,
    Mem,
}

/// `DatabaseBackend` over a CozoDB instance.
pub struct CozoBackend {
    db: DbInstance,
    storage: CozoStorage,
}

impl CozoBackend {
    pub fn new(db: DbInstance, storage: CozoStorage) -> Self {
        Self { db, storage }
    }
}

impl DatabaseBackend for CozoBackend {
    fn execute_query(
        &self,
        script: &str,
        params: &Params,
    ) -> Result<QueryResult<DataValue>, Box<dyn Error>> {
        let rows = self
            .db
            .run_script(script, params.clone(), ScriptMutability::Mutable)
            .map_err(|e| DbError::QueryFailed {
                message: format!("{:?}", e),
            })?;
        Ok(QueryResult {
            headers: rows.headers,
            rows: rows.rows,
        })
    }

    fn backend_name(&self) -> &'static str {
        match self.storage {
            CozoStorage::Sqlite => "CozoSqlite",
            CozoStorage::Mem => "CozoMem",
        }
    }

    fn relation_exists(&self, name: &str) -> Result<bool, Box<dyn Error>> {
        let result = self.execute_query_no_params("::relations")?;
        Ok(result
            .first_column()
            .any(|cell| cell.as_string().as_deref() == Some(name)))
    }

    fn try_create_relation(&self, relation: &SchemaRelation) -> Result<bool, Box<dyn Error>> {
        if self.relation_exists(&relation.name)? {
            return Ok(false);
        }
        self.execute_query_no_params(&CozoCompiler::compile_relation(relation))?;
        Ok(true)
    }

    fn insert_rows(
        &self,
        relation: &SchemaRelation,
        rows: Vec<Vec<DataValue>>,
    ) -> Result<usize, Box<dyn Error>> {
        if rows.is_empty() {
            return Ok(0);
        }
        let literals: Vec<String> = rows.iter().map(|row| CozoCompiler::row_literal(row)).collect();
        self.execute_query_no_params(&CozoCompiler::compile_insert(relation, &literals))?;
        Ok(rows.len())
    }
}

/// Open a CozoDB database backed by SQLite storage.
pub fn open_db(path: &Path) -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
    let db = DbInstance::new("sqlite", path, "").map_err(|e| DbError::OpenFailed {
        path: path.display().to_string(),
        message: format!("{:?}", e),
    })?;
    Ok(Box::new(CozoBackend::new(db, CozoStorage::Sqlite)))
}

/// Create an in-memory database instance.
pub fn open_mem_db() -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
    let db = DbInstance::new("mem", "", "").map_err(|e| DbError::OpenFailed {
        path: ":memory:".to_string(),
        message: format!("{:?}", e),
    })?;
    Ok(Box::new(CozoBackend::new(db, CozoStorage::Mem)))
}
