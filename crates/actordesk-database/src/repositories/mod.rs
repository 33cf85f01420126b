//! Repository implementations for the actor table.

pub mod actor;
pub mod memory;

use async_trait::async_trait;

use actordesk_core::result::AppResult;
use actordesk_core::traits::Repository;
use actordesk_entity::{Actor, ActorColumn, ActorId, ActorPatch};

pub use actor::ActorRepository;
pub use memory::MemoryActorStore;

/// Everything the application needs from actor persistence: the generic
/// read operations plus the one supported write.
#[async_trait]
pub trait ActorStore: Repository<Actor, ActorId, ActorColumn> {
    /// Apply a partial update of the name fields.
    ///
    /// An empty patch issues no statement and returns `false`. Otherwise
    /// returns whether a row with `id` existed.
    async fn update_names(&self, id: ActorId, patch: &ActorPatch) -> AppResult<bool>;
}
