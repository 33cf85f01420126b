//! # actordesk-export
//!
//! Row-at-a-time encoders for bulk exports:
//!
//! * [`delimited`] writes comma-separated text, either per record (for
//!   chunked HTTP bodies) or into any `Write`.
//! * [`xlsx`] writes a single-worksheet spreadsheet container by copying
//!   a template archive and generating `xl/worksheets/sheet1.xml`.
//!
//! Both implement [`RowSink`], so callers can drain a row source into
//! either format without caring which one it is.

pub mod delimited;
pub mod error;
pub mod format;
pub mod xlsx;

pub use delimited::{CsvEncoder, encode_record};
pub use error::ExportError;
pub use format::ExportFormat;
pub use xlsx::{Template, XlsxEncoder, column_letter};

/// A destination that accepts one row of display values at a time.
pub trait RowSink {
    /// Append one row. Cells are written in the order given.
    fn write_row(&mut self, cells: &[String]) -> Result<(), ExportError>;

    /// Number of data rows written so far, not counting the title row.
    fn rows_written(&self) -> u64;
}
