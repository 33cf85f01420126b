//! Schema migration commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use actordesk_core::error::AppError;
use actordesk_database::DatabasePool;
use actordesk_database::migration::{MIGRATOR, run_migrations};

use crate::output::{self, OutputFormat};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply pending migrations to the configured database
    Run,
    /// List the migrations embedded in this binary
    List,
}

/// One embedded migration
#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    #[tabled(rename = "Version")]
    version: i64,
    #[tabled(rename = "Description")]
    description: String,
}

fn embedded() -> Vec<MigrationRow> {
    MIGRATOR
        .iter()
        .map(|m| MigrationRow {
            version: m.version,
            description: m.description.to_string(),
        })
        .collect()
}

pub async fn execute(args: &MigrateArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::List => output::print_list(&embedded(), format),
        MigrateCommand::Run => {
            let config = super::load_config(env)?;
            let db = DatabasePool::connect(&config.database).await?;
            let result = run_migrations(db.pool()).await;
            db.close().await;
            result?;
            output::print_success(&format!("Schema up to date ({} migrations known)", MIGRATOR.iter().count()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_list() {
        let rows = embedded();
        assert_eq!(rows[0].version, 1);
        assert_eq!(rows[0].description, "create actor");
    }
}
