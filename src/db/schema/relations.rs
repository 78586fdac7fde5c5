//! Lowering of registry models into stored relations.

use super::definition::{DataType, SchemaField, SchemaRelation};
use crate::registry::ModelDef;

/// Name of the implicit integer key column of every model relation.
pub const PRIMARY_KEY: &str = "id";

/// Build the stored relation for a model.
///
/// Key field: id
/// Value fields: the model's fields, in declaration order
pub fn model_relation(model: &ModelDef) -> SchemaRelation {
    SchemaRelation {
        name: model.table_name(),
        key_fields: vec![SchemaField::new(PRIMARY_KEY, DataType::Int, false)],
        value_fields: model
            .fields
            .iter()
            .map(|f| SchemaField::new(f.name.clone(), f.field_type.data_type(), f.is_nullable()))
            .collect(),
    }
}
