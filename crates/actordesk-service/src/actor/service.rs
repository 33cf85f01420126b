//! Actor listing, detail and edit use cases.

use std::sync::Arc;

use tracing::{debug, info};

use actordesk_core::error::AppError;
use actordesk_core::result::AppResult;
use actordesk_core::traits::Repository;
use actordesk_core::types::pagination::{PageRequest, PageResponse};
use actordesk_core::types::sorting::SortField;
use actordesk_database::ActorStore;
use actordesk_entity::actor::MAX_NAME_LENGTH;
use actordesk_entity::{Actor, ActorColumn, ActorId, ActorPatch};

use super::view::{ActorDetailView, ActorListView};

/// Reads and edits actors through an [`ActorStore`].
#[derive(Clone)]
pub struct ActorService {
    store: Arc<dyn ActorStore>,
}

impl std::fmt::Debug for ActorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorService").finish()
    }
}

impl ActorService {
    /// Creates a new actor service.
    pub fn new(store: Arc<dyn ActorStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of actors in the requested order.
    pub async fn page(
        &self,
        page: PageRequest,
        sort: SortField<ActorColumn>,
    ) -> AppResult<PageResponse<Actor>> {
        debug!(
            page = page.page,
            page_size = page.page_size,
            sort = %sort.to_query(),
            "Listing actors"
        );
        self.store.find_page(&page, &sort).await
    }

    /// Fetch one page of actors prepared for the list template.
    pub async fn list(
        &self,
        page: PageRequest,
        sort: SortField<ActorColumn>,
    ) -> AppResult<ActorListView> {
        let rows = self.page(page, sort).await?;
        Ok(ActorListView::new(rows, sort))
    }

    /// Fetch a single actor.
    pub async fn get(&self, id: ActorId) -> AppResult<Actor> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Actor {id} not found")))
    }

    /// Detail page data for an actor, optionally in edit mode.
    pub async fn detail(&self, id: ActorId, editing: bool) -> AppResult<ActorDetailView> {
        let actor = self.get(id).await?;
        Ok(ActorDetailView::new(&actor, editing))
    }

    /// Apply the submitted name fields to an actor.
    ///
    /// Returns `false` without touching the row when nothing recognised
    /// was submitted. Submitted names must be non-blank and at most
    /// [`MAX_NAME_LENGTH`] characters, matching the table's constraints.
    pub async fn edit(&self, id: ActorId, patch: &ActorPatch) -> AppResult<bool> {
        if patch.is_empty() {
            self.get(id).await?;
            debug!(actor_id = %id, "Edit submitted no recognised fields");
            return Ok(false);
        }

        for (field, value) in [("first_name", &patch.first_name), ("last_name", &patch.last_name)] {
            let Some(value) = value.as_deref() else { continue };
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{field} must not be empty")));
            }
            if value.chars().count() > MAX_NAME_LENGTH {
                return Err(AppError::validation(format!(
                    "{field} must be at most {MAX_NAME_LENGTH} characters"
                )));
            }
        }

        if !self.store.update_names(id, patch).await? {
            return Err(AppError::not_found(format!("Actor {id} not found")));
        }

        info!(actor_id = %id, fields = ?patch.fields(), "Actor updated");
        Ok(true)
    }

    /// Total number of actors.
    pub async fn count(&self) -> AppResult<u64> {
        self.store.count().await
    }
}
