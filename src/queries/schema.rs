//! Creation of the stored relations backing registered models.

use std::error::Error;

use serde::Serialize;

use crate::db::DatabaseBackend;
use crate::db::schema::model_relation;
use crate::registry::ModelRegistry;

/// Outcome of creating one model's relation.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaResult {
    pub model: String,
    pub relation: String,
    pub created: bool,
}

/// Names of the relations for every registered model, in declaration order.
pub fn relation_names(registry: &ModelRegistry) -> Vec<String> {
    registry.models().map(|m| m.table_name()).collect()
}

/// Create the relation of every registered model that does not exist yet.
pub fn create_schema(
    db: &dyn DatabaseBackend,
    registry: &ModelRegistry,
) -> Result<Vec<SchemaResult>, Box<dyn Error>> {
    let mut results = Vec::new();
    for model in registry.models() {
        let relation = model_relation(model);
        let created = db.try_create_relation(&relation)?;
        if created {
            tracing::debug!(relation = %relation.name, "created relation");
        }
        results.push(SchemaResult {
            model: model.label(),
            relation: relation.name,
            created,
        });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_mem_db;
    use crate::fixtures;
    use rstest::rstest;

    #[rstest]
    fn test_relation_names() {
        let registry = ModelRegistry::from_json_str(fixtures::CROSS_APP).unwrap();
        assert_eq!(relation_names(&registry), vec!["accounts_customer", "shop_order"]);
    }

    #[rstest]
    fn test_create_schema_is_idempotent() {
        let registry = ModelRegistry::from_json_str(fixtures::LIBRARY).unwrap();
        let db = open_mem_db().unwrap();

        let first = create_schema(db.as_ref(), &registry).unwrap();
        assert_eq!(first.len(), 5);
        assert!(first.iter().all(|r| r.created));

        let second = create_schema(db.as_ref(), &registry).unwrap();
        assert_eq!(second.len(), 5);
        assert!(second.iter().all(|r| !r.created));
    }
}
