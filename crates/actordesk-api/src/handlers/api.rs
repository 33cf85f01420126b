//! JSON endpoints mirroring the list and detail pages.

use axum::Json;
use axum::extract::{Path, Query, State};

use actordesk_core::error::AppError;

use crate::dto::response::{ActorResponse, ApiResponse, PaginatedResponse};
use crate::extractors::{ListParams, parse_actor_id};
use crate::state::AppState;

/// GET /api/actors?sort=...&page=...&per_page=...
pub async fn list_actors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<ActorResponse>>>, AppError> {
    let page = state
        .actors
        .page(params.page_request(), params.sort_field())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(ActorResponse::from).into())))
}

/// GET /api/actors/{id}
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ActorResponse>>, AppError> {
    let actor = state.actors.get(parse_actor_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(actor.into())))
}
