//! # actordesk-database
//!
//! PostgreSQL connection management, migrations and the actor
//! repositories (sqlx-backed and in-memory).

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::{DatabasePool, redact_url};
pub use repositories::{ActorRepository, ActorStore, MemoryActorStore};
