//! Single-worksheet spreadsheet writer.
//!
//! The output is the template archive with one generated entry,
//! [`WORKSHEET_PATH`], holding every row as inline-string cells. The
//! worksheet is written row by row into a deflated zip entry, so memory
//! use does not grow with the table.

mod template;
mod worksheet;

use std::io::{Seek, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::RowSink;
use crate::error::ExportError;

pub use template::Template;
pub use worksheet::column_letter;

/// Archive path of the generated worksheet.
pub const WORKSHEET_PATH: &str = "xl/worksheets/sheet1.xml";

/// Rows per worksheet supported by spreadsheet applications.
pub const MAX_ROWS: u32 = 1_048_576;

/// Streaming writer for the worksheet of a template-based workbook.
pub struct XlsxEncoder<W: Write + Seek> {
    zip: ZipWriter<W>,
    next_row: u32,
    data_rows: u64,
}

impl<W: Write + Seek> XlsxEncoder<W> {
    /// Copy the template into `output` and open the worksheet entry.
    pub fn new(output: W, template: &Template) -> Result<Self, ExportError> {
        let mut zip = ZipWriter::new(output);
        template.copy_into(&mut zip)?;

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(true);
        zip.start_file(WORKSHEET_PATH, options)?;
        zip.write_all(worksheet::PROLOGUE.as_bytes())?;

        Ok(Self {
            zip,
            next_row: 1,
            data_rows: 0,
        })
    }

    /// Write the bold title row. Only allowed as the first row.
    pub fn write_header<S: AsRef<str>>(&mut self, titles: &[S]) -> Result<(), ExportError> {
        if self.next_row != 1 {
            return Err(ExportError::HeaderNotFirst { row: self.next_row });
        }
        self.push_row(titles, Some(worksheet::TITLE_STYLE))
    }

    /// Close the worksheet and the archive, returning the output.
    pub fn finish(mut self) -> Result<W, ExportError> {
        self.zip.write_all(worksheet::EPILOGUE.as_bytes())?;
        let output = self.zip.finish()?;
        debug!(rows = self.data_rows, "Finished worksheet");
        Ok(output)
    }

    fn push_row<S: AsRef<str>>(&mut self, cells: &[S], style: Option<u32>) -> Result<(), ExportError> {
        if self.next_row > MAX_ROWS {
            return Err(ExportError::TooManyRows { limit: MAX_ROWS });
        }
        let xml = worksheet::render_row(self.next_row, cells, style);
        self.zip.write_all(xml.as_bytes())?;
        self.next_row += 1;
        Ok(())
    }
}

impl<W: Write + Seek> RowSink for XlsxEncoder<W> {
    fn write_row(&mut self, cells: &[String]) -> Result<(), ExportError> {
        self.push_row(cells, None)?;
        self.data_rows += 1;
        Ok(())
    }

    fn rows_written(&self) -> u64 {
        self.data_rows
    }
}
