//! Cozo Datalog compiler.
//!
//! Generates Cozo DDL (`:create relation { ... }`), `:put` inserts and the
//! read queries used while generating rows. The output format is
//! deterministic so it can be asserted on directly.

use cozo::{DataValue, Num};

use crate::db::escape_string;
use crate::db::schema::definition::SchemaRelation;

/// Compiler for generating CozoScript from schema definitions.
pub struct CozoCompiler;

impl CozoCompiler {
    /// Generate Cozo DDL for a single relation.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// :create relation_name {
    ///     key_field1: Type1
    ///     =>
    ///     value_field1: Type1,
    ///     value_field2: Type2?
    /// }
    /// ```
    /// The `=>` section is omitted when the relation has no value fields.
    pub fn compile_relation(relation: &SchemaRelation) -> String {
        let key_fields = relation
            .key_fields
            .iter()
            .map(|f| format!("    {}: {}", f.name, f.cozo_type()))
            .collect::<Vec<_>>()
            .join(",\n");

        if relation.value_fields.is_empty() {
            return format!(":create {} {{\n{}\n}}", relation.name, key_fields);
        }

        let value_fields = relation
            .value_fields
            .iter()
            .map(|f| format!("    {}: {}", f.name, f.cozo_type()))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            ":create {} {{\n{}\n    =>\n{}\n}}",
            relation.name, key_fields, value_fields
        )
    }

    /// Format a value as a CozoScript literal.
    pub fn value_literal(value: &DataValue) -> String {
        match value {
            DataValue::Null => "null".to_string(),
            DataValue::Bool(b) => b.to_string(),
            DataValue::Num(Num::Int(i)) => i.to_string(),
            DataValue::Num(Num::Float(f)) => format!("{:?}", f),
            DataValue::Str(s) => format!("\"{}\"", escape_string(s)),
            other => format!("{:?}", other),
        }
    }

    /// Format a row as a CozoScript list literal, e.g. `[1, "Ada", true]`.
    pub fn row_literal(row: &[DataValue]) -> String {
        let cells = row
            .iter()
            .map(Self::value_literal)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", cells)
    }

    /// Generate Cozo :put statement for batch insert.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// ?[id, title, author] <- [[1, "Dune", 3], [2, "Emma", 1]]
    /// :put library_book { id => title, author }
    /// ```
    pub fn compile_insert(relation: &SchemaRelation, row_literals: &[String]) -> String {
        let all_columns = relation
            .all_fields()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let key_columns = relation
            .key_fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let value_columns = relation
            .value_fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let target = if value_columns.is_empty() {
            format!("{{ {} }}", key_columns)
        } else {
            format!("{{ {} => {} }}", key_columns, value_columns)
        };

        format!(
            "?[{}] <- [{}]\n:put {} {}",
            all_columns,
            row_literals.join(", "),
            relation.name,
            target,
        )
    }

    /// Number of rows in a relation.
    pub fn compile_count(relation: &SchemaRelation, key: &str) -> String {
        format!("?[count({key})] := *{}{{{key}}}", relation.name)
    }

    /// Largest key in a relation.
    pub fn compile_max_key(relation: &SchemaRelation, key: &str) -> String {
        format!("?[max({key})] := *{}{{{key}}}", relation.name)
    }

    /// Distinct values of one column.
    pub fn compile_column_values(relation: &SchemaRelation, column: &str) -> String {
        format!("?[{column}] := *{}{{{column}}}", relation.name)
    }

    /// Keys of the rows whose `column` equals `$value`, at most one.
    pub fn compile_value_probe(relation: &SchemaRelation, key: &str, column: &str) -> String {
        format!(
            "?[{key}] := *{}{{{key}, {column}}}, {column} == $value\n:limit 1",
            relation.name
        )
    }
}
