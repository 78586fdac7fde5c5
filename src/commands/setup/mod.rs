mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};
use crate::registry::ModelRegistry;

pub use execute::{RelationState, RelationStatus, SetupResult};

/// Create the stored relation of every registered model
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  seed_data setup                                  # Create missing relations
  seed_data setup --dry-run                        # Show what would be created
  seed_data --db ./dev.sqlite --schema app.json setup")]
pub struct SetupCmd {
    /// Show what would be created without doing it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CommandRunner for SetupCmd {
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

#[cfg(test)]
mod cli_tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "setup",
        variant: Setup,
        required_args: [],
        defaults: {
            dry_run: false,
        },
    }

    crate::cli_option_test! {
        command: "setup",
        variant: Setup,
        test_name: test_with_dry_run,
        args: ["--dry-run"],
        field: dry_run,
        expected: true,
    }
}
