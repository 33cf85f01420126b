//! PostgreSQL actor repository.

use async_trait::async_trait;
use futures::StreamExt;
use sqlx::PgPool;
use tracing::debug;

use actordesk_core::error::{AppError, ErrorKind};
use actordesk_core::result::AppResult;
use actordesk_core::traits::{Repository, RowStream};
use actordesk_core::types::pagination::{PageRequest, PageResponse};
use actordesk_core::types::sorting::SortField;
use actordesk_entity::{Actor, ActorColumn, ActorId, ActorPatch};

use super::ActorStore;

const SELECT_COLUMNS: &str = "SELECT actor_id, first_name, last_name, last_update FROM actor";

/// Repository for actor queries and name updates.
#[derive(Debug, Clone)]
pub struct ActorRepository {
    pool: PgPool,
}

impl ActorRepository {
    /// Create a new actor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the paged listing query. Column names come from the closed
/// [`ActorColumn`] set, never from user input.
fn page_query(sort: &SortField<ActorColumn>) -> String {
    let direction = sort.direction.as_sql();
    let order_by = match sort.column {
        ActorColumn::ActorId => format!("actor_id {direction}"),
        column => format!("{} {direction}, actor_id ASC", column.as_str()),
    };
    format!("{SELECT_COLUMNS} ORDER BY {order_by} LIMIT $1 OFFSET $2")
}

#[async_trait]
impl Repository<Actor, ActorId, ActorColumn> for ActorRepository {
    async fn find_by_id(&self, id: ActorId) -> AppResult<Option<Actor>> {
        sqlx::query_as::<_, Actor>(&format!("{SELECT_COLUMNS} WHERE actor_id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find actor by id", e))
    }

    async fn find_page(
        &self,
        page: &PageRequest,
        sort: &SortField<ActorColumn>,
    ) -> AppResult<PageResponse<Actor>> {
        let total = self.count().await?;

        let sql = page_query(sort);
        debug!(sql = %sql, page = page.page, page_size = page.page_size, "Listing actors");

        let actors = sqlx::query_as::<_, Actor>(&sql)
            .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list actors", e))?;

        Ok(PageResponse::new(actors, page.page, page.page_size, total))
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM actor")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count actors", e))?;
        Ok(count.max(0) as u64)
    }

    fn stream_all(&self) -> RowStream<'_, Actor> {
        sqlx::query_as::<_, Actor>(
            "SELECT actor_id, first_name, last_name, last_update FROM actor ORDER BY actor_id",
        )
        .fetch(&self.pool)
        .map(|row| {
            row.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to stream actors", e))
        })
        .boxed()
    }
}

#[async_trait]
impl ActorStore for ActorRepository {
    async fn update_names(&self, id: ActorId, patch: &ActorPatch) -> AppResult<bool> {
        if patch.is_empty() {
            return Ok(false);
        }

        let result = sqlx::query(
            "UPDATE actor SET first_name = COALESCE($2, first_name), \
                              last_name = COALESCE($3, last_name), \
                              last_update = LOCALTIMESTAMP \
             WHERE actor_id = $1",
        )
        .bind(id)
        .bind(patch.first_name.as_deref())
        .bind(patch.last_name.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update actor", e))?;

        debug!(actor_id = %id, fields = ?patch.fields(), rows = result.rows_affected(), "Updated actor");
        Ok(result.rows_affected() > 0)
    }
}
