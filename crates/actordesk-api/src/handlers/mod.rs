//! Route handlers organized by domain.

pub mod actor;
pub mod api;
pub mod export;
pub mod health;
