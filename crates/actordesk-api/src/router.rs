//! Route definitions for ActorDesk.
//!
//! HTML pages live under `/actors`, the JSON API under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;

use actordesk_core::error::AppError;

use crate::error::HtmlError;
use crate::handlers;
use crate::state::AppState;

/// Build the router with every route.
///
/// Page and API routes are bounded by the configured request timeout.
/// Export downloads are not, as spooling a large workbook may take longer.
pub fn build_router(state: AppState) -> Router {
    let timeout = TimeoutLayer::new(Duration::from_secs(
        state.config.server.request_timeout_seconds,
    ));

    Router::new()
        .route("/", get(|| async { Redirect::to("/actors/") }))
        .merge(page_routes().layer(timeout.clone()))
        .nest("/api", api_routes().layer(timeout))
        .merge(export_routes())
        .fallback(not_found)
        .with_state(state)
}

/// HTML pages: list, detail and edit.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/actors", get(|| async { Redirect::permanent("/actors/") }))
        .route("/actors/", get(handlers::actor::list_actors))
        .route("/actors/{id}/", get(handlers::actor::get_actor))
        .route(
            "/actors/{id}/edit/",
            get(handlers::actor::edit_actor_form).post(handlers::actor::edit_actor),
        )
}

/// Bulk downloads.
fn export_routes() -> Router<AppState> {
    Router::new().route(
        "/actors/export/{file_extension}/",
        get(handlers::export::export_actors),
    )
}

/// JSON endpoints.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
        .route("/actors", get(handlers::api::list_actors))
        .route("/actors/{id}", get(handlers::api::get_actor))
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> HtmlError {
    HtmlError::render(
        &state.views,
        AppError::not_found(format!("Nothing at {}", uri.path())),
    )
}
