mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};
use crate::registry::ModelRegistry;

pub use execute::{ModelSummary, ModelsResult};

/// List registered models with their row counts
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  seed_data models                   # Every registered model
  seed_data models --module library  # Models of one app
  seed_data --format json models")]
pub struct ModelsCmd {
    /// Only list models of this app
    #[arg(long)]
    pub module: Option<String>,
}

impl CommandRunner for ModelsCmd {
    fn run(
        self,
        db: &dyn DatabaseBackend,
        registry: &ModelRegistry,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db, registry)?;
        Ok(result.format(format))
    }
}
