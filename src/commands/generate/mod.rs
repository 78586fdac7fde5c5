mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::generator::MAX_SIZE;
use crate::output::{OutputFormat, Outputable};
use crate::registry::ModelRegistry;

pub use execute::GenerateResult;

/// Generate fake rows for a model and everything it depends on
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  seed_data generate --module library --model Book --size 10
  seed_data generate --module library --model book --size 0          # Only create relations
  seed_data generate --module shop --model Order --size 5 --seed 42  # Reproducible run
  seed_data --format json generate --module shop --model Order --size 5")]
pub struct GenerateCmd {
    /// App label the model belongs to
    #[arg(long)]
    pub module: String,

    /// Model name (case-insensitive)
    #[arg(long)]
    pub model: String,

    /// Number of rows to generate
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_SIZE as i64))]
    pub size: u32,

    /// Seed for the random source, for reproducible data
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CommandRunner for GenerateCmd {
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
