use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seed_data::cli::Args;
use seed_data::config::ConfigFile;
use seed_data::db::DatabaseConfig;
use seed_data::registry::ModelRegistry;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level());

    match run(args) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<String, Box<dyn Error>> {
    let config = ConfigFile::load()?;

    let schema_path = ConfigFile::schema_path(config.as_ref(), args.schema.as_deref());
    let registry = ModelRegistry::load(&schema_path)?;
    tracing::debug!(schema = %schema_path.display(), models = registry.models().count(), "loaded registry");

    let db_config = DatabaseConfig::resolve(args.db.as_deref(), config.as_ref())?;
    let db = db_config.connect()?;
    tracing::debug!(backend = db.backend_name(), "connected");

    args.command.run(db.as_ref(), &registry, args.format)
}
