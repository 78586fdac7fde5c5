//! Output formatting for generate command results.

use super::execute::GenerateResult;
use crate::output::Outputable;

impl Outputable for GenerateResult {
    /// A successful run is silent in table format.
    fn to_table(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GenerationReport, ModelRows};
    use crate::output::OutputFormat;
    use rstest::{fixture, rstest};

    #[fixture]
    fn result() -> GenerateResult {
        GenerateResult {
            module: "shop".to_string(),
            model: "Order".to_string(),
            size: 2,
            total_rows: 4,
            report: GenerationReport {
                models: vec![
                    ModelRows {
                        model: "accounts.Customer".to_string(),
                        rows: 2,
                    },
                    ModelRows {
                        model: "shop.Order".to_string(),
                        rows: 2,
                    },
                ],
            },
        }
    }

    crate::output_table_test! {
        test_name: test_table_is_empty,
        fixture: result,
        fixture_type: GenerateResult,
        expected: "",
    }

    crate::output_json_test! {
        test_name: test_json_format,
        fixture: result,
        fixture_type: GenerateResult,
        assertions: {
            "model": "Order",
            "size": 2,
            "total_rows": 4,
        },
    }

    #[rstest]
    fn test_json_lists_models_in_write_order(result: GenerateResult) {
        let parsed: serde_json::Value =
            serde_json::from_str(&result.format(OutputFormat::Json)).expect("valid JSON");
        assert_eq!(parsed["models"][0]["model"], "accounts.Customer");
        assert_eq!(parsed["models"][1]["rows"], 2);
    }

    crate::output_toon_test! {
        test_name: test_toon_format,
        fixture: result,
        fixture_type: GenerateResult,
        contains: ["shop.Order", "total_rows"],
    }
}
