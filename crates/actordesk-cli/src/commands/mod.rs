//! CLI command definitions and dispatch.

pub mod actor;
pub mod config;
pub mod export;
pub mod migrate;
pub mod serve;

use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};

use actordesk_core::config::AppConfig;
use actordesk_core::error::AppError;
use actordesk_database::{ActorRepository, ActorStore, DatabasePool};

use crate::output::OutputFormat;

/// Environment variable selecting the configuration overlay.
pub const ENV_VAR: &str = "ACTORDESK_ENV";

/// ActorDesk: browse, edit and export the actor table
#[derive(Debug, Parser)]
#[command(name = "actordesk", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment, loads `config/<env>.toml` over the defaults
    #[arg(short, long, env = ENV_VAR, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Browse and edit actors
    Actor(actor::ActorArgs),
    /// Export every actor to a file
    Export(export::ExportArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env, self.format).await,
            Commands::Actor(args) => actor::execute(args, &self.env, self.format).await,
            Commands::Export(args) => export::execute(args, &self.env).await,
            Commands::Config(args) => config::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: connect and wrap the actor repository
pub async fn connect_store(config: &AppConfig) -> Result<(DatabasePool, Arc<dyn ActorStore>), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    let store: Arc<dyn ActorStore> = Arc::new(ActorRepository::new(db.pool().clone()));
    Ok((db, store))
}
