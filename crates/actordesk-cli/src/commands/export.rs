//! Export the actor table to a file.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use actordesk_core::error::AppError;
use actordesk_export::{ExportFormat, Template};
use actordesk_service::ExportService;

use crate::output;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format: csv or xlsx
    #[arg(value_parser = parse_format)]
    pub format: ExportFormat,

    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse::<ExportFormat>()
        .map_err(|_| format!("unsupported export format '{raw}' (expected csv or xlsx)"))
}

/// Execute the export command
pub async fn execute(args: &ExportArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let template = Template::load(config.export.xlsx_template.as_deref())?;
    let (db, store) = super::connect_store(&config).await?;

    let service = ExportService::new(store, Arc::new(template), config.export.clone());
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(service.file_name(args.format)));

    let result = service.write_file(args.format, &path).await;
    db.close().await;

    let summary = result?;
    output::print_success(&format!(
        "Exported {} actors to {}",
        summary.rows,
        summary.path.display()
    ));
    Ok(())
}
