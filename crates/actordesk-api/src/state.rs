//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use actordesk_core::config::AppConfig;
use actordesk_core::result::AppResult;
use actordesk_database::ActorStore;
use actordesk_export::Template;
use actordesk_service::{ActorService, ExportService};

use crate::views::Views;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Listing, detail and edit use cases
    pub actors: Arc<ActorService>,
    /// CSV and XLSX exports
    pub exports: Arc<ExportService>,
    /// Compiled page templates
    pub views: Arc<Views>,
    /// When the state was built, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wire services and views around an actor store.
    pub fn new(config: AppConfig, store: Arc<dyn ActorStore>) -> AppResult<Self> {
        let template = Template::load(config.export.xlsx_template.as_deref())?;
        let actors = ActorService::new(Arc::clone(&store));
        let exports = ExportService::new(store, Arc::new(template), config.export.clone());

        Ok(Self {
            config: Arc::new(config),
            actors: Arc::new(actors),
            exports: Arc::new(exports),
            views: Arc::new(Views::new()?),
            started_at: Instant::now(),
        })
    }
}
