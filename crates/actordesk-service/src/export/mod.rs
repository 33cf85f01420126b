//! Bulk export use cases.

pub mod service;

pub use service::{ExportService, ExportSummary};

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use futures::{StreamExt, TryStreamExt};

    use actordesk_core::config::ExportConfig;
    use actordesk_core::error::{AppError, ErrorKind};
    use actordesk_core::result::AppResult;
    use actordesk_core::traits::{Repository, RowStream};
    use actordesk_core::types::pagination::{PageRequest, PageResponse};
    use actordesk_core::types::sorting::SortField;
    use actordesk_database::{ActorStore, MemoryActorStore};
    use actordesk_entity::{Actor, ActorColumn, ActorId, ActorPatch};
    use actordesk_export::{ExportFormat, Template};

    use super::*;

    fn actor(i: i32) -> Actor {
        Actor {
            actor_id: ActorId(i),
            first_name: format!("FIRST{i}"),
            last_name: if i == 2 { "O'HARA, JR".to_string() } else { format!("LAST{i}") },
            last_update: NaiveDate::from_ymd_opt(2006, 2, 15)
                .unwrap()
                .and_hms_opt(4, 34, 33)
                .unwrap(),
        }
    }

    fn export_service(store: Arc<dyn ActorStore>) -> ExportService {
        let config = ExportConfig {
            channel_capacity: 4,
            ..ExportConfig::default()
        };
        ExportService::new(store, Arc::new(Template::builtin().unwrap()), config)
    }

    fn service(n: i32) -> ExportService {
        export_service(Arc::new(MemoryActorStore::with_actors((1..=n).map(actor))))
    }

    /// Streams `rows` actors, failing at `fail_at`, and counts how many
    /// rows were pulled.
    struct ScriptedStore {
        rows: i32,
        fail_at: Option<i32>,
        pulled: Arc<AtomicUsize>,
    }

    impl ScriptedStore {
        fn new(rows: i32, fail_at: Option<i32>) -> Self {
            Self {
                rows,
                fail_at,
                pulled: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl Repository<Actor, ActorId, ActorColumn> for ScriptedStore {
        async fn find_by_id(&self, id: ActorId) -> AppResult<Option<Actor>> {
            Ok((1..=self.rows).contains(&id.into_inner()).then(|| actor(id.into_inner())))
        }

        async fn find_page(
            &self,
            page: &PageRequest,
            _sort: &SortField<ActorColumn>,
        ) -> AppResult<PageResponse<Actor>> {
            Ok(PageResponse::new(Vec::new(), page.page, page.page_size, self.rows as u64))
        }

        async fn count(&self) -> AppResult<u64> {
            Ok(self.rows as u64)
        }

        fn stream_all(&self) -> RowStream<'_, Actor> {
            let fail_at = self.fail_at;
            let pulled = Arc::clone(&self.pulled);
            futures::stream::iter(1..=self.rows)
                .map(move |i| {
                    pulled.fetch_add(1, Ordering::SeqCst);
                    if Some(i) == fail_at {
                        Err(AppError::database("connection reset"))
                    } else {
                        Ok(actor(i))
                    }
                })
                .boxed()
        }
    }

    #[async_trait]
    impl ActorStore for ScriptedStore {
        async fn update_names(&self, _id: ActorId, _patch: &ActorPatch) -> AppResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_csv_stream_rows() {
        let chunks: Vec<_> = service(40).csv_stream().try_collect().await.unwrap();
        assert_eq!(chunks.len(), 41);

        let body: Vec<u8> = chunks.concat();
        let text = String::from_utf8(body).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID,First name,Last name,Last update");
        assert_eq!(lines[1], "1,FIRST1,LAST1,15.02.2006 04:34:33");
        assert_eq!(lines[2], "2,FIRST2,\"O'HARA, JR\",15.02.2006 04:34:33");
        assert_eq!(lines.len(), 41);
    }

    #[tokio::test]
    async fn test_csv_stream_dropped_early_stops_fetching() {
        let store = Arc::new(ScriptedStore::new(100_000, None));
        let pulled = Arc::clone(&store.pulled);

        let mut stream = Box::pin(export_service(store).csv_stream());
        let header = stream.next().await.unwrap().unwrap();
        assert!(header.starts_with(b"ID,"));
        drop(stream);

        tokio::time::sleep(Duration::from_millis(50)).await;
        let after_drop = pulled.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(pulled.load(Ordering::SeqCst), after_drop);
        assert!(after_drop < 100, "pulled {after_drop} rows after the body was dropped");
    }

    #[tokio::test]
    async fn test_csv_stream_ends_with_fetch_error() {
        let store = Arc::new(ScriptedStore::new(10, Some(3)));
        let chunks: Vec<_> = export_service(store).csv_stream().collect().await;

        assert_eq!(chunks.len(), 4);
        assert!(chunks[..3].iter().all(|c| c.is_ok()));
        let err = chunks[3].as_ref().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_failed_export_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        for format in [ExportFormat::Csv, ExportFormat::Xlsx] {
            let fresh = dir.path().join(format!("fresh.{format}"));
            let existing = dir.path().join(format!("existing.{format}"));
            std::fs::write(&existing, b"previous export").unwrap();

            for path in [&fresh, &existing] {
                let store = Arc::new(ScriptedStore::new(10, Some(3)));
                let err = export_service(store).write_file(format, path).await.unwrap_err();
                assert_eq!(err.kind, ErrorKind::Database);
            }

            assert!(!fresh.exists());
            assert_eq!(std::fs::read(&existing).unwrap(), b"previous export");
        }

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 2, "leftover files: {names:?}");
    }

    #[tokio::test]
    async fn test_xlsx_file_fetch_error() {
        let store = Arc::new(ScriptedStore::new(10, Some(5)));
        let err = export_service(store).xlsx_file().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_xlsx_file() {
        let mut file = service(30).xlsx_file().await.unwrap();
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();
        assert_eq!(sheet.matches("<row ").count(), 31);
        assert!(sheet.contains("O'HARA, JR"));
    }

    #[tokio::test]
    async fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actors.csv");

        let summary = service(12).write_file(ExportFormat::Csv, &path).await.unwrap();
        assert_eq!(summary.rows, 12);
        assert_eq!(summary.format, ExportFormat::Csv);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 13);
    }

    #[tokio::test]
    async fn test_write_xlsx_file_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actors.xlsx");

        let summary = service(0).write_file(ExportFormat::Xlsx, &path).await.unwrap();
        assert_eq!(summary.rows, 0);

        let archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        assert!(archive.file_names().any(|n| n == "xl/workbook.xml"));
    }

    #[test]
    fn test_file_name_uses_prefix() {
        let name = service(0).file_name(ExportFormat::Xlsx);
        assert!(name.starts_with("actors_"));
        assert!(name.ends_with(".xlsx"));
    }
}
