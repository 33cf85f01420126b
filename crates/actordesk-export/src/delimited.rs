//! Comma-separated output.
//!
//! Fields containing the delimiter, quotes or line breaks are quoted by
//! the `csv` writer; everything else is written as-is.

use std::io::Write;

use bytes::Bytes;

use crate::RowSink;
use crate::error::ExportError;

/// Encode a single record, including its trailing line terminator.
///
/// Used to stream a body one chunk per row without holding any writer
/// state between rows.
pub fn encode_record<S: AsRef<str>>(fields: &[S]) -> Result<Bytes, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::with_capacity(64));
    writer.write_record(fields.iter().map(|f| f.as_ref().as_bytes()))?;
    let buffer = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(Bytes::from(buffer))
}

/// CSV writer over any output, with the title row written up front.
pub struct CsvEncoder<W: Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl<W: Write> CsvEncoder<W> {
    /// Create the encoder and write the title row.
    pub fn new<S: AsRef<str>>(output: W, titles: &[S]) -> Result<Self, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(output);
        writer.write_record(titles.iter().map(|t| t.as_ref().as_bytes()))?;
        Ok(Self { writer, rows: 0 })
    }

    /// Flush buffered rows and return the underlying output.
    pub fn finish(self) -> Result<W, ExportError> {
        self.writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

impl<W: Write> RowSink for CsvEncoder<W> {
    fn write_row(&mut self, cells: &[String]) -> Result<(), ExportError> {
        self.writer.write_record(cells)?;
        self.rows += 1;
        Ok(())
    }

    fn rows_written(&self) -> u64 {
        self.rows
    }
}
