//! Actor list, detail and edit pages.

use std::collections::HashMap;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};

use actordesk_entity::ActorPatch;

use crate::error::{HtmlError, HtmlResultExt};
use crate::extractors::{ListParams, parse_actor_id};
use crate::state::AppState;

/// GET /actors/?sort=...&page=...&per_page=...
pub async fn list_actors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, HtmlError> {
    let view = state
        .actors
        .list(params.page_request(), params.sort_field())
        .await
        .or_page(&state.views)?;
    let html = state.views.list(&view).or_page(&state.views)?;
    Ok(Html(html))
}

/// GET /actors/{id}/
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, HtmlError> {
    render_item(&state, &id, false).await
}

/// GET /actors/{id}/edit/
pub async fn edit_actor_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, HtmlError> {
    render_item(&state, &id, true).await
}

/// POST /actors/{id}/edit/
///
/// Only `first_name` and `last_name` are read from the form; anything else
/// is ignored. Redirects to the detail page.
pub async fn edit_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, HtmlError> {
    let id = parse_actor_id(&id).or_page(&state.views)?;
    let patch = ActorPatch::from_form(&form);
    state.actors.edit(id, &patch).await.or_page(&state.views)?;
    Ok(Redirect::to(&format!("/actors/{id}/")))
}

async fn render_item(state: &AppState, raw_id: &str, editing: bool) -> Result<Html<String>, HtmlError> {
    let id = parse_actor_id(raw_id).or_page(&state.views)?;
    let view = state.actors.detail(id, editing).await.or_page(&state.views)?;
    let html = state.views.item(&view).or_page(&state.views)?;
    Ok(Html(html))
}
