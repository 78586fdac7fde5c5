use std::error::Error;

use serde::Serialize;

use super::SetupCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::schema;
use crate::registry::ModelRegistry;

/// Status of a database relation (table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RelationState {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "exists")]
    AlreadyExists,
    #[serde(rename = "would_create")]
    WouldCreate,
}

/// Status information for a single model's relation
#[derive(Debug, Clone, Serialize)]
pub struct RelationStatus {
    pub model: String,
    pub name: String,
    pub status: RelationState,
}

/// Result of the setup command execution
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub relations: Vec<RelationStatus>,
    pub created_new: bool,
    pub dry_run: bool,
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(
        self,
        db: &dyn DatabaseBackend,
        registry: &ModelRegistry,
    ) -> Result<Self::Output, Box<dyn Error>> {
        let mut relations = Vec::new();

        if self.dry_run {
            for model in registry.models() {
                let name = model.table_name();
                let status = if db.relation_exists(&name)? {
                    RelationState::AlreadyExists
                } else {
                    RelationState::WouldCreate
                };
                relations.push(RelationStatus {
                    model: model.label(),
                    name,
                    status,
                });
            }

            return Ok(SetupResult {
                relations,
                created_new: false,
                dry_run: true,
            });
        }

        for schema_result in schema::create_schema(db, registry)? {
            let status = if schema_result.created {
                RelationState::Created
            } else {
                RelationState::AlreadyExists
            };

            relations.push(RelationStatus {
                model: schema_result.model,
                name: schema_result.relation,
                status,
            });
        }

        let created_new = relations
            .iter()
            .any(|r| r.status == RelationState::Created);

        Ok(SetupResult {
            relations,
            created_new,
            dry_run: false,
        })
    }
}
