use std::error::Error;

use serde::Serialize;

use super::ModelsCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::db::schema::model_relation;
use crate::queries::rows;
use crate::registry::ModelRegistry;

/// One registered model and the state of its relation
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub model: String,
    pub table: String,
    pub fields: usize,
    pub required: Vec<String>,
    pub relations: Vec<String>,
    pub rows: usize,
}

/// Result of the models command
#[derive(Debug, Serialize)]
pub struct ModelsResult {
    pub module: Option<String>,
    pub models: Vec<ModelSummary>,
}

impl Execute for ModelsCmd {
    type Output = ModelsResult;

    fn execute(
        self,
        db: &dyn DatabaseBackend,
        registry: &ModelRegistry,
    ) -> Result<Self::Output, Box<dyn Error>> {
        let mut models = Vec::new();

        for model in registry.models() {
            if self.module.as_deref().is_some_and(|m| m != model.app) {
                continue;
            }

            let relation = model_relation(model);
            // missing relations have no rows yet
            let row_count = if db.relation_exists(&relation.name)? {
                rows::count_rows(db, &relation)?
            } else {
                0
            };

            models.push(ModelSummary {
                model: model.label(),
                table: relation.name,
                fields: model.fields.len(),
                required: model.required_fields().map(|f| f.name.clone()).collect(),
                relations: registry
                    .relation_targets(model)
                    .iter()
                    .map(|m| m.label())
                    .collect(),
                rows: row_count,
            });
        }

        Ok(ModelsResult {
            module: self.module,
            models,
        })
    }
}
