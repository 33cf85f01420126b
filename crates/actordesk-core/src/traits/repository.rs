//! Generic repository trait for database access.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::result::AppResult;
use crate::types::pagination::{PageRequest, PageResponse};
use crate::types::sorting::{SortColumn, SortField};

/// A lazily fetched sequence of rows.
pub type RowStream<'a, T> = Pin<Box<dyn Stream<Item = AppResult<T>> + Send + 'a>>;

/// Generic read repository trait.
///
/// Defined with type parameters so each entity gets a strongly typed
/// repository; entity-specific writes live on narrower traits in the
/// database crate.
#[async_trait]
pub trait Repository<Entity, Id, Column>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
    Column: SortColumn,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Fetch one ordered page of entities together with the total count.
    async fn find_page(
        &self,
        page: &PageRequest,
        sort: &SortField<Column>,
    ) -> AppResult<PageResponse<Entity>>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;

    /// Stream every entity in primary-key order without loading the
    /// whole table.
    fn stream_all(&self) -> RowStream<'_, Entity>;
}
