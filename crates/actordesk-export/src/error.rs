//! Export error type.

use actordesk_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Errors raised while encoding an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The template archive is unusable.
    #[error("Invalid spreadsheet template: {0}")]
    Template(String),

    /// The spreadsheet would exceed the format's row limit.
    #[error("Worksheet row limit of {limit} exceeded")]
    TooManyRows {
        /// Maximum rows per worksheet.
        limit: u32,
    },

    /// The title row was written after other rows.
    #[error("Title row must be the first row, not row {row}")]
    HeaderNotFirst {
        /// Row the title would have landed on.
        row: u32,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// ZIP library error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        let kind = match &err {
            ExportError::Template(_) => ErrorKind::Configuration,
            ExportError::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Export,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
