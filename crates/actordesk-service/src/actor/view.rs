//! View models handed to the HTML templates.

use serde::Serialize;

use actordesk_core::types::pagination::PageResponse;
use actordesk_core::types::sorting::{SortDirection, SortField};
use actordesk_entity::{Actor, ActorColumn};

/// A sortable column heading in the list view.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeading {
    /// Query-string key of the column.
    pub key: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// `sort` value the heading links to. Clicking the active column flips
    /// its direction.
    pub sort_query: String,
    /// Whether the list is currently ordered by this column.
    pub active: bool,
    /// Whether the current order on this column is descending.
    pub descending: bool,
}

/// One row of the list view.
#[derive(Debug, Clone, Serialize)]
pub struct ActorRow {
    /// Row identifier, used for the detail link.
    pub id: i32,
    /// Display values in column order.
    pub cells: Vec<String>,
}

/// Everything the list template renders.
#[derive(Debug, Clone, Serialize)]
pub struct ActorListView {
    pub columns: Vec<ColumnHeading>,
    pub rows: Vec<ActorRow>,
    /// Active `sort` value, echoed into pagination links.
    pub sort: String,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
}

impl ActorListView {
    /// Build the view for one page of actors.
    pub fn new(page: PageResponse<Actor>, sort: SortField<ActorColumn>) -> Self {
        let columns = ActorColumn::ALL
            .iter()
            .map(|column| {
                let active = *column == sort.column;
                let next = if active {
                    SortField::new(*column, sort.direction.reversed())
                } else {
                    SortField::asc(*column)
                };
                ColumnHeading {
                    key: column.as_str(),
                    title: column.title(),
                    sort_query: next.to_query(),
                    active,
                    descending: active && sort.direction == SortDirection::Desc,
                }
            })
            .collect();

        let rows = page
            .items
            .iter()
            .map(|actor| ActorRow {
                id: actor.actor_id.into_inner(),
                cells: actor.display_values(),
            })
            .collect();

        Self {
            columns,
            rows,
            sort: sort.to_query(),
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            previous_page: page.has_previous.then(|| page.page - 1),
            next_page: page.has_next.then(|| page.page + 1),
        }
    }
}

/// A labelled field on the detail and edit pages.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub key: &'static str,
    pub title: &'static str,
    pub value: String,
    /// Rendered as an input on the edit page.
    pub editable: bool,
}

/// Detail page, optionally in edit mode.
#[derive(Debug, Clone, Serialize)]
pub struct ActorDetailView {
    pub id: i32,
    pub fields: Vec<FieldView>,
    pub editing: bool,
}

impl ActorDetailView {
    /// Build the detail view of an actor. In edit mode only the name
    /// fields are marked editable.
    pub fn new(actor: &Actor, editing: bool) -> Self {
        let fields = ActorColumn::ALL
            .iter()
            .map(|column| FieldView {
                key: column.as_str(),
                title: column.title(),
                value: actor.display_value(*column),
                editable: editing && column.is_editable(),
            })
            .collect();

        Self {
            id: actor.actor_id.into_inner(),
            fields,
            editing,
        }
    }
}
