//! Spreadsheet template archives.

use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::ExportError;

use super::WORKSHEET_PATH;

/// Entries every template must carry for the output to open.
const REQUIRED_ENTRIES: [&str; 2] = ["[Content_Types].xml", "xl/workbook.xml"];

/// Parts of the bundled template, in archive order.
const BUILTIN_PARTS: [(&str, &str); 5] = [
    (
        "[Content_Types].xml",
        include_str!("../../template/[Content_Types].xml"),
    ),
    ("_rels/.rels", include_str!("../../template/_rels/.rels")),
    ("xl/workbook.xml", include_str!("../../template/xl/workbook.xml")),
    (
        "xl/_rels/workbook.xml.rels",
        include_str!("../../template/xl/_rels/workbook.xml.rels"),
    ),
    ("xl/styles.xml", include_str!("../../template/xl/styles.xml")),
];

/// A validated template archive held in memory.
///
/// Every entry except the worksheet is copied verbatim into each export.
#[derive(Debug, Clone)]
pub struct Template {
    bytes: Vec<u8>,
    entries: Vec<String>,
}

impl Template {
    /// The template bundled with the crate: one sheet named `Actors` and a
    /// bold style for the title row.
    pub fn builtin() -> Result<Self, ExportError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, content) in BUILTIN_PARTS {
            writer.start_file(name, options)?;
            writer.write_all(content.as_bytes())?;
        }
        let bytes = writer.finish()?.into_inner();
        Self::from_bytes(bytes)
    }

    /// Load a template from raw archive bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ExportError> {
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice()))
            .map_err(|e| ExportError::Template(format!("not a zip archive: {e}")))?;
        let entries: Vec<String> = archive.file_names().map(str::to_string).collect();

        for required in REQUIRED_ENTRIES {
            if !entries.iter().any(|name| name == required) {
                return Err(ExportError::Template(format!("missing entry {required}")));
            }
        }

        Ok(Self { bytes, entries })
    }

    /// Load a template from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        debug!(path = %path.display(), size = bytes.len(), "Loaded spreadsheet template");
        Self::from_bytes(bytes)
    }

    /// Load the template at `path` when one is configured, the bundled one
    /// otherwise.
    pub fn load(path: Option<&str>) -> Result<Self, ExportError> {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }

    /// Names of the entries in the archive.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Copy every entry except the worksheet into `writer`, keeping the
    /// original compressed data.
    pub fn copy_into<W: Write + Seek>(&self, writer: &mut ZipWriter<W>) -> Result<(), ExportError> {
        let mut archive = ZipArchive::new(Cursor::new(self.bytes.as_slice()))?;
        for index in 0..archive.len() {
            let entry = archive.by_index_raw(index)?;
            if entry.name() == WORKSHEET_PATH {
                continue;
            }
            writer.raw_copy_file(entry)?;
        }
        Ok(())
    }

    /// Read one entry's uncompressed content.
    pub fn read_entry(&self, name: &str) -> Result<Vec<u8>, ExportError> {
        let mut archive = ZipArchive::new(Cursor::new(self.bytes.as_slice()))?;
        let mut entry = archive.by_name(name)?;
        let mut content = Vec::new();
        entry.read_to_end(&mut content)?;
        Ok(content)
    }
}
