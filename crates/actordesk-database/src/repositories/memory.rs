//! In-memory actor store.
//!
//! Backs the router and service tests, and any deployment that wants to
//! run the UI without PostgreSQL.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use futures::StreamExt;

use actordesk_core::error::AppError;
use actordesk_core::result::AppResult;
use actordesk_core::traits::{Repository, RowStream};
use actordesk_core::types::pagination::{PageRequest, PageResponse};
use actordesk_core::types::sorting::{SortDirection, SortField};
use actordesk_entity::{Actor, ActorColumn, ActorId, ActorPatch};

use super::ActorStore;

/// Actor rows held in a map keyed (and therefore ordered) by id.
#[derive(Debug, Default)]
pub struct MemoryActorStore {
    rows: RwLock<BTreeMap<ActorId, Actor>>,
}

impl MemoryActorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with rows.
    pub fn with_actors(actors: impl IntoIterator<Item = Actor>) -> Self {
        let rows = actors
            .into_iter()
            .map(|actor| (actor.actor_id, actor))
            .collect();
        Self {
            rows: RwLock::new(rows),
        }
    }

    fn snapshot(&self) -> AppResult<Vec<Actor>> {
        self.rows
            .read()
            .map(|rows| rows.values().cloned().collect())
            .map_err(|_| AppError::internal("Actor store lock poisoned"))
    }
}

fn compare(a: &Actor, b: &Actor, column: ActorColumn) -> Ordering {
    match column {
        ActorColumn::ActorId => a.actor_id.cmp(&b.actor_id),
        ActorColumn::FirstName => a.first_name.cmp(&b.first_name),
        ActorColumn::LastName => a.last_name.cmp(&b.last_name),
        ActorColumn::LastUpdate => a.last_update.cmp(&b.last_update),
    }
}

#[async_trait]
impl Repository<Actor, ActorId, ActorColumn> for MemoryActorStore {
    async fn find_by_id(&self, id: ActorId) -> AppResult<Option<Actor>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| AppError::internal("Actor store lock poisoned"))?;
        Ok(rows.get(&id).cloned())
    }

    async fn find_page(
        &self,
        page: &PageRequest,
        sort: &SortField<ActorColumn>,
    ) -> AppResult<PageResponse<Actor>> {
        let mut actors = self.snapshot()?;
        let total = actors.len() as u64;

        actors.sort_by(|a, b| {
            let primary = match sort.direction {
                SortDirection::Asc => compare(a, b, sort.column),
                SortDirection::Desc => compare(b, a, sort.column),
            };
            primary.then_with(|| a.actor_id.cmp(&b.actor_id))
        });

        let items = actors
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count(&self) -> AppResult<u64> {
        let rows = self
            .rows
            .read()
            .map_err(|_| AppError::internal("Actor store lock poisoned"))?;
        Ok(rows.len() as u64)
    }

    fn stream_all(&self) -> RowStream<'_, Actor> {
        match self.snapshot() {
            Ok(actors) => futures::stream::iter(actors.into_iter().map(Ok)).boxed(),
            Err(e) => futures::stream::once(async move { Err(e) }).boxed(),
        }
    }
}

#[async_trait]
impl ActorStore for MemoryActorStore {
    async fn update_names(&self, id: ActorId, patch: &ActorPatch) -> AppResult<bool> {
        if patch.is_empty() {
            return Ok(false);
        }

        let mut rows = self
            .rows
            .write()
            .map_err(|_| AppError::internal("Actor store lock poisoned"))?;
        match rows.get_mut(&id) {
            Some(actor) => {
                patch.apply_to(actor);
                actor.last_update = Utc::now().naive_utc();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::TryStreamExt;

    fn actor(id: i32, first: &str, last: &str) -> Actor {
        Actor {
            actor_id: ActorId(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            last_update: NaiveDate::from_ymd_opt(2006, 2, 15)
                .unwrap()
                .and_hms_opt(4, 34, 33)
                .unwrap(),
        }
    }

    fn store(n: i32) -> MemoryActorStore {
        MemoryActorStore::with_actors((1..=n).map(|i| actor(i, &format!("F{i:03}"), "SMITH")))
    }

    #[tokio::test]
    async fn test_page_bounds() {
        let store = store(60);
        for (page, size) in [(1, 25), (2, 25), (3, 25), (4, 25), (1, 100), (7, 9)] {
            let req = PageRequest::new(page, size);
            let result = store.find_page(&req, &SortField::default()).await.unwrap();
            assert!(result.items.len() as u64 <= size);
            assert_eq!(result.total_items, 60);
            if let Some(first) = result.items.first() {
                assert_eq!(first.actor_id.0 as u64, req.offset() + 1);
            }
        }
    }

    #[tokio::test]
    async fn test_sort_desc_with_id_tie_break() {
        let store = MemoryActorStore::with_actors(vec![
            actor(1, "A", "ZETA"),
            actor(2, "B", "ALPHA"),
            actor(3, "C", "ZETA"),
        ]);
        let page = store
            .find_page(
                &PageRequest::default(),
                &SortField::desc(ActorColumn::LastName),
            )
            .await
            .unwrap();
        let ids: Vec<i32> = page.items.iter().map(|a| a.actor_id.0).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[tokio::test]
    async fn test_update_only_submitted_fields() {
        let store = store(3);
        let patch = ActorPatch {
            first_name: Some("GRACE".to_string()),
            last_name: None,
        };
        assert!(store.update_names(ActorId(2), &patch).await.unwrap());

        let updated = store.find_by_id(ActorId(2)).await.unwrap().unwrap();
        assert_eq!(updated.first_name, "GRACE");
        assert_eq!(updated.last_name, "SMITH");
    }

    #[tokio::test]
    async fn test_empty_patch_is_noop() {
        let store = store(1);
        let before = store.find_by_id(ActorId(1)).await.unwrap().unwrap();
        assert!(
            !store
                .update_names(ActorId(1), &ActorPatch::default())
                .await
                .unwrap()
        );
        let after = store.find_by_id(ActorId(1)).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let store = store(1);
        let patch = ActorPatch {
            first_name: Some("X".to_string()),
            last_name: None,
        };
        assert!(!store.update_names(ActorId(99), &patch).await.unwrap());
    }

    #[tokio::test]
    async fn test_stream_all_in_id_order() {
        let store = MemoryActorStore::with_actors(vec![actor(3, "C", "C"), actor(1, "A", "A")]);
        let rows: Vec<Actor> = store.stream_all().try_collect().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].actor_id, ActorId(1));
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
