//! Row-level reads and writes on model relations.
//!
//! These are the only store operations the generator needs: count rows,
//! allocate the next key, list keys or column values, probe for an existing
//! value, and save a row.

use std::error::Error;

use cozo::{DataValue, Num};

use crate::db::schema::compilers::CozoCompiler;
use crate::db::schema::{PRIMARY_KEY, SchemaRelation};
use crate::db::{DatabaseBackend, DatabaseValue, DbError, Params};

/// Number of rows stored in a relation.
pub fn count_rows(db: &dyn DatabaseBackend, relation: &SchemaRelation) -> Result<usize, Box<dyn Error>> {
    let result = db.execute_query_no_params(&CozoCompiler::compile_count(relation, PRIMARY_KEY))?;
    let count = result.scalar().map(|v| v.as_i64_or(0)).unwrap_or(0);
    Ok(usize::try_from(count).unwrap_or(0))
}

/// Key for the next row: one past the largest stored key, or 1.
pub fn next_key(db: &dyn DatabaseBackend, relation: &SchemaRelation) -> Result<i64, Box<dyn Error>> {
    let result = db.execute_query_no_params(&CozoCompiler::compile_max_key(relation, PRIMARY_KEY))?;
    let max = result.scalar().and_then(|v| v.as_i64()).unwrap_or(0);
    Ok(max + 1)
}

/// Keys of every stored row, ascending.
pub fn row_keys(db: &dyn DatabaseBackend, relation: &SchemaRelation) -> Result<Vec<i64>, Box<dyn Error>> {
    let result =
        db.execute_query_no_params(&CozoCompiler::compile_column_values(relation, PRIMARY_KEY))?;
    result
        .first_column()
        .map(|v| {
            v.as_i64().ok_or_else(|| {
                Box::new(DbError::UnexpectedValue {
                    column: PRIMARY_KEY.to_string(),
                    expected: "number",
                    actual: v.type_name(),
                }) as Box<dyn Error>
            })
        })
        .collect()
}

/// Distinct non-null values stored in `column`.
pub fn column_values(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    column: &str,
) -> Result<Vec<DataValue>, Box<dyn Error>> {
    let result = db.execute_query_no_params(&CozoCompiler::compile_column_values(relation, column))?;
    Ok(result.first_column().filter(|v| !v.is_null()).cloned().collect())
}

/// Whether any stored row already holds `value` in `column`.
pub fn value_exists(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    column: &str,
    value: &DataValue,
) -> Result<bool, Box<dyn Error>> {
    let mut params = Params::new();
    params.insert("value".to_string(), value.clone());
    let script = CozoCompiler::compile_value_probe(relation, PRIMARY_KEY, column);
    let result = db.execute_query(&script, &params)?;
    Ok(!result.rows.is_empty())
}

/// Save one row under `key`. `values` follow the relation's value fields.
pub fn insert_row(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    key: i64,
    values: Vec<DataValue>,
) -> Result<(), Box<dyn Error>> {
    let mut row = Vec::with_capacity(values.len() + 1);
    row.push(DataValue::Num(Num::Int(key)));
    row.extend(values);
    db.insert_rows(relation, vec![row])?;
    Ok(())
}
