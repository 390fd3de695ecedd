//! `internhub` administration entrypoint.
//!
//! ```text
//! internhub [--config internhub.toml] migrate
//! internhub [--config internhub.toml] check
//! ```
//!
//! `migrate` applies the marketplace schema; `check` verifies the database
//! answers.

use clap::{Parser, Subcommand};
use internhub::config::{AppConfig, ConfigError, LoggingConfig};
use internhub::db::{self, DatabaseError};
use internhub::telemetry;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "internhub", version, about = "Internship marketplace administration")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "internhub.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply the marketplace schema to the configured database.
    Migrate,
    /// Verify the configured database is reachable.
    Check,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            telemetry::init(&LoggingConfig::default());
            error!(error = %err, "internhub command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load(&cli.config)?;
    telemetry::init(&config.logging);

    let database = config.database.clone();
    let pool = tokio::task::spawn_blocking(move || db::build_pool(&database))
        .await
        .map_err(DatabaseError::from)??;

    match cli.command {
        Command::Migrate => {
            db::apply_schema(&pool).await?;
            info!("marketplace schema applied");
        }
        Command::Check => {
            db::ping(&pool).await?;
            info!(
                max_connections = config.database.max_connections,
                "database reachable"
            );
        }
    }
    Ok(())
}
