//! Output formatting for models command results.

use super::execute::ModelsResult;
use crate::output::Outputable;

impl Outputable for ModelsResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        match &self.module {
            Some(module) => lines.push(format!("Models in: {}", module)),
            None => lines.push("Models".to_string()),
        }
        lines.push(String::new());

        if self.models.is_empty() {
            lines.push("No models found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Found {} model(s):", self.models.len()));
        for model in &self.models {
            lines.push(format!(
                "  {} ({}) {} field(s), {} row(s)",
                model.model, model.table, model.fields, model.rows
            ));
            if !model.required.is_empty() {
                lines.push(format!("    required: {}", model.required.join(", ")));
            }
            if !model.relations.is_empty() {
                lines.push(format!("    relations: {}", model.relations.join(", ")));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::ModelSummary;
    use rstest::{fixture, rstest};

    const EMPTY_TABLE: &str = "\
Models in: billing

No models found.";

    const SINGLE_TABLE: &str = "\
Models

Found 1 model(s):
  shop.Order (shop_order) 2 field(s), 3 row(s)
    required: customer, total
    relations: accounts.Customer";

    #[fixture]
    fn single_result() -> ModelsResult {
        ModelsResult {
            module: None,
            models: vec![ModelSummary {
                model: "shop.Order".to_string(),
                table: "shop_order".to_string(),
                fields: 2,
                required: vec!["customer".to_string(), "total".to_string()],
                relations: vec!["accounts.Customer".to_string()],
                rows: 3,
            }],
        }
    }

    #[rstest]
    fn test_empty_table() {
        let result = ModelsResult {
            module: Some("billing".to_string()),
            models: vec![],
        };
        assert_eq!(result.to_table(), EMPTY_TABLE);
    }

    crate::output_table_test! {
        test_name: test_single_table,
        fixture: single_result,
        fixture_type: ModelsResult,
        expected: SINGLE_TABLE,
    }

    crate::output_json_test! {
        test_name: test_json_format,
        fixture: single_result,
        fixture_type: ModelsResult,
        assertions: {
            "module": serde_json::Value::Null,
        },
    }
}
