//! Schema migrations embedded from the workspace `migrations/` directory.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::{debug, info};

use actordesk_core::error::{AppError, ErrorKind};

/// Every migration shipped with this build.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply the migrations the database has not seen yet. Existing tables
/// are left alone, so this is safe against a provisioned `actor` table.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    for migration in MIGRATOR.iter() {
        debug!(version = migration.version, description = %migration.description, "Known migration");
    }

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;

    info!(known = MIGRATOR.iter().count(), "Schema up to date");
    Ok(())
}
