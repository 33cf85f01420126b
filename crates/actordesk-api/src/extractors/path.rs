//! Typed path parameter helpers.

use actordesk_core::error::AppError;
use actordesk_entity::ActorId;

/// Parses an actor id from a path segment.
///
/// Anything that is not an id cannot name an actor, so it is reported as
/// not found rather than as a bad request.
pub fn parse_actor_id(s: &str) -> Result<ActorId, AppError> {
    s.parse::<ActorId>()
        .map_err(|_| AppError::not_found(format!("No actor at '{s}'")))
}
