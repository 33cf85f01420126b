//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an optional environment overlay and
//! `ACTORDESK__*` environment variables. Each sub-module represents a
//! logical configuration section.

pub mod app;
pub mod database;
pub mod export;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::export::ExportConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable holding the database URL, kept for compatibility
/// with existing deployments.
pub const DB_CONN_VAR: &str = "DB_CONN";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Bulk export settings.
    #[serde(default)]
    pub export: ExportConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration relative to the current working directory.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from(Path::new("."), env)
    }

    /// Load configuration from TOML files under `root/config`.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// and environment variables prefixed with `ACTORDESK__`. `DB_CONN`
    /// wins over every file and variable for the database URL.
    pub fn load_from(root: &Path, env: &str) -> Result<Self, AppError> {
        Self::load_with_url(root, env, std::env::var(DB_CONN_VAR).ok())
    }

    fn load_with_url(root: &Path, env: &str, url: Option<String>) -> Result<Self, AppError> {
        let config_dir = root.join("config");
        let default_file = config_dir.join("default");
        let env_file = config_dir.join(env);

        let config = config::Config::builder()
            .add_source(config::File::from(default_file).required(false))
            .add_source(config::File::from(env_file).required(false))
            .add_source(
                config::Environment::with_prefix("ACTORDESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", url.filter(|u| !u.trim().is_empty()))?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from a TOML document, applying defaults for
    /// missing sections.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.export.file_prefix, "actors");
        assert!(config.export.xlsx_template.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [server]
            port = 9000

            [export]
            channel_capacity = 16
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.export.channel_capacity, 16);
    }

    #[test]
    fn test_environment_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("default.toml"),
            "[server]\nport = 7000\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();
        std::fs::write(config_dir.join("staging.toml"), "[server]\nport = 7100\n").unwrap();

        let config = AppConfig::load_from(dir.path(), "staging").unwrap();
        assert_eq!(config.server.port, 7100);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_db_conn_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("default.toml"),
            "[database]\nurl = \"postgres://file@db/sakila\"\nmax_connections = 3\n",
        )
        .unwrap();

        let config = AppConfig::load_with_url(
            dir.path(),
            "development",
            Some("postgres://env@other/sakila".to_string()),
        )
        .unwrap();
        assert_eq!(config.database.url, "postgres://env@other/sakila");
        assert_eq!(config.database.max_connections, 3);

        let config = AppConfig::load_with_url(dir.path(), "development", None).unwrap();
        assert_eq!(config.database.url, "postgres://file@db/sakila");

        let config = AppConfig::load_with_url(dir.path(), "development", Some(" ".to_string())).unwrap();
        assert_eq!(config.database.url, "postgres://file@db/sakila");
    }
}
