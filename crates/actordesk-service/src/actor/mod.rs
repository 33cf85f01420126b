//! Actor use cases and their view models.

pub mod service;
pub mod view;

pub use service::ActorService;
pub use view::{ActorDetailView, ActorListView, ActorRow, ColumnHeading, FieldView};
