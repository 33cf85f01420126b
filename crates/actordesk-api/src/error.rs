//! Maps domain `AppError` to HTML responses for the page routes.
//!
//! The `/api` routes return `AppError` directly and get the JSON body from
//! its `IntoResponse` impl in `actordesk-core`.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use actordesk_core::error::AppError;

use crate::views::Views;

/// An error already rendered as an HTML page.
#[derive(Debug)]
pub struct HtmlError {
    status: StatusCode,
    body: String,
}

impl HtmlError {
    /// Render `err` with the error page template.
    pub fn render(views: &Views, err: AppError) -> Self {
        let status = err.kind.status_code();
        let message = if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Page request failed");
            "The request could not be completed."
        } else {
            err.message.as_str()
        };

        Self {
            status,
            body: views.error(status, message),
        }
    }

    /// HTTP status of the page.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}

/// Shorthand for turning a service result into a page result.
pub trait HtmlResultExt<T> {
    /// Render the error, if any, as an HTML page.
    fn or_page(self, views: &Views) -> Result<T, HtmlError>;
}

impl<T> HtmlResultExt<T> for Result<T, AppError> {
    fn or_page(self, views: &Views) -> Result<T, HtmlError> {
        self.map_err(|e| HtmlError::render(views, e))
    }
}
