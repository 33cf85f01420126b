//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use actordesk_core::error::AppError;
use actordesk_database::redact_url;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Check that the configuration loads
    Validate,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;
    config.database.url = redact_url(&config.database.url);

    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(&config),
            OutputFormat::Table => {
                output::print_kv("environment", env);
                output::print_kv("server", &config.server.bind_address());
                output::print_kv("database", &config.database.url);
                output::print_kv(
                    "max connections",
                    &config.database.max_connections.to_string(),
                );
                output::print_kv(
                    "xlsx template",
                    config.export.xlsx_template.as_deref().unwrap_or("built-in"),
                );
                output::print_kv("log level", &config.logging.level);
                output::print_kv("log format", &config.logging.format);
            }
        },
        ConfigCommand::Validate => {
            output::print_success(&format!("Configuration '{env}' is valid"));
            output::print_kv("server", &config.server.bind_address());
            output::print_kv("database", &config.database.url);
        }
    }

    Ok(())
}
