//! Core traits defined in `actordesk-core` and implemented by other crates.

pub mod repository;

pub use repository::{Repository, RowStream};
