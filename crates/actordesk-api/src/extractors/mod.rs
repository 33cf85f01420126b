//! Request parameter extraction helpers.

pub mod pagination;
pub mod path;

pub use pagination::ListParams;
pub use path::parse_actor_id;
