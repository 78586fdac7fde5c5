use std::error::Error;

use serde::Serialize;

use super::GenerateCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::generator::{self, GenerationReport};
use crate::registry::ModelRegistry;

/// Result of a generate run
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub module: String,
    pub model: String,
    pub size: u32,
    pub total_rows: usize,
    #[serde(flatten)]
    pub report: GenerationReport,
}

impl Execute for GenerateCmd {
    type Output = GenerateResult;

    fn execute(
        self,
        db: &dyn DatabaseBackend,
        registry: &ModelRegistry,
    ) -> Result<Self::Output, Box<dyn Error>> {
        let report = generator::generate(
            registry,
            db,
            &self.module,
            &self.model,
            self.size as usize,
            self.seed,
        )?;

        tracing::info!(
            module = %self.module,
            model = %self.model,
            rows = report.total_rows(),
            "generation finished"
        );

        Ok(GenerateResult {
            module: self.module,
            model: self.model,
            size: self.size,
            total_rows: report.total_rows(),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::generator::GenerateError;
    use crate::test_utils::{setup_test_db, stored_rows};
    use rstest::rstest;

    fn cmd(module: &str, model: &str, size: u32) -> GenerateCmd {
        GenerateCmd {
            module: module.to_string(),
            model: model.to_string(),
            size,
            seed: Some(11),
        }
    }

    #[rstest]
    fn test_generate_reports_rows() {
        let (registry, db) = setup_test_db(fixtures::CROSS_APP);
        let result = cmd("shop", "Order", 3)
            .execute(db.as_ref(), &registry)
            .expect("Generate should succeed");

        assert_eq!(result.module, "shop");
        assert_eq!(result.size, 3);
        assert_eq!(result.report.rows_for("accounts.Customer"), 3);
        assert_eq!(result.report.rows_for("shop.Order"), 12);
        assert_eq!(result.total_rows, 15);
    }

    #[rstest]
    fn test_generate_creates_missing_relations() {
        let registry = crate::test_utils::registry_from(fixtures::CROSS_APP);
        let db = crate::db::open_mem_db().unwrap();

        cmd("accounts", "Customer", 1)
            .execute(db.as_ref(), &registry)
            .expect("Generate should succeed");

        assert_eq!(stored_rows(db.as_ref(), "accounts_customer").len(), 1);
        assert_eq!(stored_rows(db.as_ref(), "shop_order").len(), 1);
    }

    #[rstest]
    fn test_generate_unknown_model() {
        let (registry, db) = setup_test_db(fixtures::CROSS_APP);
        let err = cmd("shop", "Invoice", 1)
            .execute(db.as_ref(), &registry)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::ModelNotFound { .. })
        ));
        assert!(stored_rows(db.as_ref(), "shop_order").is_empty());
    }
}
