//! # actordesk-api
//!
//! HTTP layer for ActorDesk built on Axum.
//!
//! Serves the HTML list, detail and edit pages, the CSV and XLSX exports,
//! a small JSON API and health checks, with CORS, compression, timeout and
//! logging middleware.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use app::{build_app, run_server};
pub use state::AppState;
