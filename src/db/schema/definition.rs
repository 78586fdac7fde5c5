//! Core schema definition types.
//!
//! Provides a backend-agnostic description of a stored relation. Model
//! definitions from the registry are lowered into these types before any
//! DDL or insert script is compiled.

/// Represents a database data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// String/text data
    String,
    /// Integer data
    Int,
    /// Boolean data
    Bool,
}

impl DataType {
    /// Returns the Cozo type name for this data type.
    pub fn cozo_type(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Int => "Int",
            DataType::Bool => "Bool",
        }
    }
}

/// Represents a column in a schema relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// Column name (e.g., "id", "title", "author")
    pub name: String,

    /// Column data type
    pub data_type: DataType,

    /// Whether the column accepts null
    pub nullable: bool,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    /// Cozo column type, with the `?` suffix for nullable columns.
    pub fn cozo_type(&self) -> String {
        if self.nullable {
            format!("{}?", self.data_type.cozo_type())
        } else {
            self.data_type.cozo_type().to_string()
        }
    }
}

/// Represents a complete database relation/table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRelation {
    /// Relation name (e.g., "library_author")
    pub name: String,

    /// Fields that form the key (must be unique)
    pub key_fields: Vec<SchemaField>,

    /// Fields that are associated values
    pub value_fields: Vec<SchemaField>,
}

impl SchemaRelation {
    /// Returns all fields in this relation (key + value).
    pub fn all_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.key_fields.iter().chain(self.value_fields.iter())
    }

    /// Returns the total number of fields.
    pub fn field_count(&self) -> usize {
        self.key_fields.len() + self.value_fields.len()
    }
}
