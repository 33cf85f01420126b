//! # actordesk-entity
//!
//! Domain entity models for ActorDesk. The application manages a single
//! table, `actor`; every struct here is either a row of that table or a
//! value object derived from it.

pub mod actor;

pub use actor::{Actor, ActorColumn, ActorId, ActorPatch};
