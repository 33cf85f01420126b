//! Pagination and sorting query parameters.

use serde::Deserialize;

use actordesk_core::types::pagination::PageRequest;
use actordesk_core::types::sorting::SortField;
use actordesk_entity::ActorColumn;

/// Query parameters accepted by list endpoints.
///
/// Every value is taken as raw text so that malformed input falls back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default: 25, max: 100).
    pub per_page: Option<String>,
    /// Alias of `per_page`.
    pub page_size: Option<String>,
    /// Column key, prefixed with `-` for descending order.
    pub sort: Option<String>,
}

impl ListParams {
    /// Converts to a clamped `PageRequest`. `per_page` wins over
    /// `page_size` when both are given.
    pub fn page_request(&self) -> PageRequest {
        let size = self.per_page.as_deref().or(self.page_size.as_deref());
        PageRequest::from_raw(self.page.as_deref(), size)
    }

    /// Converts to the requested ordering.
    pub fn sort_field(&self) -> SortField<ActorColumn> {
        SortField::parse(self.sort.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actordesk_core::types::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

    fn params(page: Option<&str>, per_page: Option<&str>, page_size: Option<&str>) -> ListParams {
        ListParams {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
            page_size: page_size.map(str::to_string),
            sort: None,
        }
    }

    #[test]
    fn test_defaults() {
        let req = ListParams::default().page_request();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(ListParams::default().sort_field(), SortField::default());
    }

    #[test]
    fn test_page_size_alias() {
        assert_eq!(params(None, None, Some("10")).page_request().page_size, 10);
        assert_eq!(params(None, Some("5"), Some("10")).page_request().page_size, 5);
        assert_eq!(
            params(Some("0"), Some("999"), None).page_request(),
            PageRequest::new(1, MAX_PAGE_SIZE)
        );
    }

    #[test]
    fn test_sort() {
        let p = ListParams {
            sort: Some("-last_update".to_string()),
            ..ListParams::default()
        };
        assert_eq!(p.sort_field(), SortField::desc(ActorColumn::LastUpdate));

        let unknown = ListParams {
            sort: Some("salary".to_string()),
            ..ListParams::default()
        };
        assert_eq!(unknown.sort_field(), SortField::asc(ActorColumn::ActorId));
    }
}
