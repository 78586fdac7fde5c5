//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` impl producing a command-specific result
//! - An `Outputable` impl rendering that result

mod generate;
mod models;
mod setup;

pub use generate::GenerateCmd;
pub use models::ModelsCmd;
pub use setup::SetupCmd;

use std::error::Error;

use clap::Subcommand;

use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};
use crate::registry::ModelRegistry;

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(
        self,
        db: &dyn DatabaseBackend,
        registry: &ModelRegistry,
    ) -> Result<Self::Output, Box<dyn Error>>;
}

/// Runs a command and renders its result in the requested format.
pub trait CommandRunner {
    fn run(
        self,
        db: &dyn DatabaseBackend,
        registry: &ModelRegistry,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate fake rows for a model and everything it depends on
    Generate(GenerateCmd),

    /// Create the stored relation of every registered model
    Setup(SetupCmd),

    /// List registered models with their row counts
    Models(ModelsCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(
        self,
        db: &dyn DatabaseBackend,
        registry: &ModelRegistry,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Generate(cmd) => cmd.run(db, registry, format),
            Command::Setup(cmd) => cmd.run(db, registry, format),
            Command::Models(cmd) => cmd.run(db, registry, format),
        }
    }
}
