//! Server-side HTML rendering with Handlebars.
//!
//! Templates are compiled into the binary and registered once at startup.

use axum::http::StatusCode;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use actordesk_core::error::{AppError, ErrorKind};
use actordesk_core::result::AppResult;
use actordesk_service::{ActorDetailView, ActorListView};

const LAYOUT: &str = "layout";
const LIST: &str = "list";
const ITEM: &str = "item";
const ERROR: &str = "error";

/// Registered page templates.
#[derive(Debug)]
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Compile and register every page template.
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_dev_mode(false);

        registry
            .register_partial(LAYOUT, include_str!("../../templates/layout.hbs"))
            .map_err(template_error)?;
        for (name, source) in [
            (LIST, include_str!("../../templates/list.hbs")),
            (ITEM, include_str!("../../templates/item.hbs")),
            (ERROR, include_str!("../../templates/error.hbs")),
        ] {
            registry
                .register_template_string(name, source)
                .map_err(template_error)?;
        }

        Ok(Self { registry })
    }

    /// Render the paginated actor list.
    pub fn list(&self, view: &ActorListView) -> AppResult<String> {
        self.render(LIST, view)
    }

    /// Render the detail page, or the edit form when `view.editing` is set.
    pub fn item(&self, view: &ActorDetailView) -> AppResult<String> {
        self.render(ITEM, view)
    }

    /// Render an error page. Falls back to plain markup if the template
    /// itself fails.
    pub fn error(&self, status: StatusCode, message: &str) -> String {
        let heading = match status {
            StatusCode::NOT_FOUND => "Not found",
            StatusCode::BAD_REQUEST => "Bad request",
            _ => "Something went wrong",
        };
        let data = json!({ "heading": heading, "message": message });
        self.render(ERROR, &data).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Error page template failed");
            format!("<h1>{heading}</h1>")
        })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<String> {
        self.registry.render(name, data).map_err(|e| {
            AppError::with_source(ErrorKind::Template, format!("Failed to render {name}"), e)
        })
    }
}

fn template_error(err: handlebars::TemplateError) -> AppError {
    AppError::with_source(ErrorKind::Template, "Invalid page template", err)
}
