//! Bulk export download.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tokio_util::io::ReaderStream;

use actordesk_core::error::AppError;
use actordesk_export::ExportFormat;

use crate::error::{HtmlError, HtmlResultExt};
use crate::state::AppState;

/// GET /actors/export/{file_extension}/
///
/// CSV is streamed row by row as it is read. XLSX is assembled in a
/// temporary file first, then streamed from disk.
pub async fn export_actors(
    State(state): State<AppState>,
    Path(extension): Path<String>,
) -> Result<Response, HtmlError> {
    let format: ExportFormat = extension.parse().or_page(&state.views)?;
    let filename = state.exports.file_name(format);

    let body = match format {
        ExportFormat::Csv => Body::from_stream(state.exports.csv_stream()),
        ExportFormat::Xlsx => {
            let file = state.exports.xlsx_file().await.or_page(&state.views)?;
            Body::from_stream(ReaderStream::new(tokio::fs::File::from_std(file)))
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, format.content_type())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(body)
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
        .or_page(&state.views)
}
