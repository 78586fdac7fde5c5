//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate fake rows for registered models", long_about = None)]
pub struct Args {
    /// Database URL: a SQLite path, sqlite://PATH, or :memory:
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Path to the model schema JSON file
    #[arg(long, global = true)]
    pub schema: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_global_defaults() {
        let args = Args::try_parse_from(["seed_data", "setup"]).unwrap();
        assert_eq!(args.db, None);
        assert_eq!(args.schema, None);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.log_level(), "warn");
    }

    #[rstest]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "seed_data", "models", "--db", ":memory:", "--schema", "app.json", "--format", "json",
        ])
        .unwrap();
        assert_eq!(args.db.as_deref(), Some(":memory:"));
        assert_eq!(args.schema, Some(PathBuf::from("app.json")));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[rstest]
    #[case(&["seed_data", "-v", "setup"], "info")]
    #[case(&["seed_data", "-vv", "setup"], "debug")]
    #[case(&["seed_data", "-vvvv", "setup"], "trace")]
    fn test_verbosity(#[case] argv: &[&str], #[case] level: &str) {
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.log_level(), level);
    }

    #[rstest]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["seed_data", "--format", "xml", "setup"]).is_err());
    }

    #[rstest]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["seed_data"]).is_err());
    }
}
