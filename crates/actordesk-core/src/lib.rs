//! # actordesk-core
//!
//! Core crate for ActorDesk. Contains configuration schemas, the unified
//! error system, pagination/sorting types and the generic repository
//! trait implemented by the database crate.
//!
//! This crate has **no** internal dependencies on other ActorDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
