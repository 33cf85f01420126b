//! Bulk export of the actor table.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use chrono::Utc;
use futures::channel::mpsc;
use futures::{SinkExt, Stream, StreamExt};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use actordesk_core::config::ExportConfig;
use actordesk_core::error::AppError;
use actordesk_core::result::AppResult;
use actordesk_database::ActorStore;
use actordesk_entity::ActorColumn;
use actordesk_export::{CsvEncoder, ExportFormat, RowSink, Template, XlsxEncoder, encode_record};

/// Summary of an export written to disk.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Where the file was written.
    pub path: PathBuf,
    /// Output format.
    pub format: ExportFormat,
    /// Data rows written, excluding the title row.
    pub rows: u64,
}

/// Streams every actor into CSV or XLSX output.
#[derive(Clone)]
pub struct ExportService {
    store: Arc<dyn ActorStore>,
    template: Arc<Template>,
    config: ExportConfig,
}

impl std::fmt::Debug for ExportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportService")
            .field("file_prefix", &self.config.file_prefix)
            .finish()
    }
}

impl ExportService {
    /// Creates a new export service.
    pub fn new(store: Arc<dyn ActorStore>, template: Arc<Template>, config: ExportConfig) -> Self {
        Self {
            store,
            template,
            config,
        }
    }

    /// Attachment name for an export generated now.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format.file_name(&self.config.file_prefix, Utc::now())
    }

    /// CSV body as a stream of chunks: the title row, then one chunk per
    /// actor in id order.
    ///
    /// Rows are fetched on a background task and handed over through a
    /// bounded channel. Dropping the stream stops the fetch at the next
    /// row. A failure mid-way ends the stream with that error.
    pub fn csv_stream(&self) -> impl Stream<Item = AppResult<Bytes>> + Send + 'static {
        let (mut tx, rx) = mpsc::channel::<AppResult<Bytes>>(self.config.channel_capacity.max(1));
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            let started = Instant::now();
            let mut sent = 0u64;

            let header = encode_record(&ActorColumn::titles()).map_err(AppError::from);
            if tx.send(header).await.is_err() {
                return;
            }

            let mut rows = store.stream_all();
            while let Some(row) = rows.next().await {
                let chunk = row.and_then(|actor| {
                    encode_record(&actor.display_values()).map_err(AppError::from)
                });
                let failed = chunk.is_err();
                if tx.send(chunk).await.is_err() {
                    debug!(rows = sent, "CSV export abandoned by receiver");
                    return;
                }
                if failed {
                    warn!(rows = sent, "CSV export aborted");
                    return;
                }
                sent += 1;
            }

            info!(
                rows = sent,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "CSV export streamed"
            );
        });

        rx
    }

    /// Build the complete XLSX workbook in an anonymous temporary file and
    /// return it rewound to the start.
    pub async fn xlsx_file(&self) -> AppResult<File> {
        let template = Arc::clone(&self.template);
        let (file, rows) = self
            .drain_blocking(move |rows| {
                let mut encoder = XlsxEncoder::new(tempfile::tempfile()?, &template)?;
                encoder.write_header(&ActorColumn::titles())?;
                let written = drain(&mut encoder, rows)?;
                let mut file = encoder.finish()?;
                file.seek(SeekFrom::Start(0))?;
                Ok((file, written))
            })
            .await?;

        info!(rows, "XLSX export spooled");
        Ok(file)
    }

    /// Write a complete export to `path`.
    ///
    /// Output goes to a temporary file next to `path`, which only replaces
    /// `path` once every row is written. A failed export leaves `path`
    /// untouched.
    pub async fn write_file(&self, format: ExportFormat, path: &Path) -> AppResult<ExportSummary> {
        let template = Arc::clone(&self.template);
        let target = path.to_path_buf();

        let rows = self
            .drain_blocking(move |rows| {
                let dir = match target.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };
                let spool = NamedTempFile::new_in(dir)?;

                let (spool, written) = match format {
                    ExportFormat::Csv => {
                        let mut encoder = CsvEncoder::new(spool, &ActorColumn::titles())?;
                        let written = drain(&mut encoder, rows)?;
                        (encoder.finish()?, written)
                    }
                    ExportFormat::Xlsx => {
                        let mut encoder = XlsxEncoder::new(spool, &template)?;
                        encoder.write_header(&ActorColumn::titles())?;
                        let written = drain(&mut encoder, rows)?;
                        (encoder.finish()?, written)
                    }
                };

                spool.as_file().sync_all()?;
                spool.persist(&target).map_err(|e| AppError::from(e.error))?;
                Ok(written)
            })
            .await?;

        info!(path = %path.display(), %format, rows, "Export written");
        Ok(ExportSummary {
            path: path.to_path_buf(),
            format,
            rows,
        })
    }

    /// Feed every actor's display values to `job`, which runs on the
    /// blocking pool and owns the synchronous encoder.
    ///
    /// A failed fetch is forwarded to `job` as the last message, so the
    /// encoder stops without finishing its output.
    async fn drain_blocking<T, F>(&self, job: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(RowReceiver) -> AppResult<T> + Send + 'static,
    {
        let (tx, rx) = tokio::sync::mpsc::channel(self.config.channel_capacity.max(1));
        let writer = tokio::task::spawn_blocking(move || job(rx));

        let mut rows = self.store.stream_all();
        while let Some(row) = rows.next().await {
            let failed = row.is_err();
            if tx.send(row.map(|actor| actor.display_values())).await.is_err() || failed {
                // The encoder stopped early or was handed the error; its
                // result is reported below.
                break;
            }
        }
        drop(tx);

        writer
            .await
            .map_err(|e| AppError::internal(format!("Export task failed: {e}")))?
    }
}

/// Rows handed from the async fetch to the blocking encoder.
type RowReceiver = tokio::sync::mpsc::Receiver<AppResult<Vec<String>>>;

fn drain(sink: &mut impl RowSink, mut rows: RowReceiver) -> AppResult<u64> {
    while let Some(cells) = rows.blocking_recv() {
        sink.write_row(&cells?)?;
    }
    Ok(sink.rows_written())
}
