//! # actordesk-service
//!
//! Use cases for ActorDesk. Services receive their store and settings at
//! construction time and are cheap to clone into handlers.

pub mod actor;
pub mod export;

pub use actor::{ActorDetailView, ActorListView, ActorService};
pub use export::{ExportService, ExportSummary};
