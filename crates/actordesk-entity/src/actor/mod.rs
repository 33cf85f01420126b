//! Actor domain entities.

pub mod column;
pub mod id;
pub mod model;
pub mod patch;

pub use column::ActorColumn;
pub use id::ActorId;
pub use model::{Actor, MAX_NAME_LENGTH, TIMESTAMP_FORMAT};
pub use patch::ActorPatch;
