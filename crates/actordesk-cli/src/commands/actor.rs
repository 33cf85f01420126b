//! Actor browsing and editing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use actordesk_core::error::AppError;
use actordesk_core::types::pagination::PageRequest;
use actordesk_core::types::sorting::SortField;
use actordesk_entity::{Actor, ActorColumn, ActorId, ActorPatch};
use actordesk_service::ActorService;

use crate::output::{self, OutputFormat};

/// Arguments for actor commands
#[derive(Debug, Args)]
pub struct ActorArgs {
    /// Actor subcommand
    #[command(subcommand)]
    pub command: ActorCommand,
}

/// Actor subcommands
#[derive(Debug, Subcommand)]
pub enum ActorCommand {
    /// List one page of actors
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<i64>,
        /// Actors per page (1 to 100)
        #[arg(long)]
        per_page: Option<i64>,
        /// Column key, prefix with `-` for descending order
        #[arg(long, allow_hyphen_values = true)]
        sort: Option<String>,
    },
    /// Show one actor
    Show {
        /// Actor id
        id: i32,
    },
    /// Change an actor's names
    Edit {
        /// Actor id
        id: i32,
        /// New first name
        #[arg(long)]
        first_name: Option<String>,
        /// New last name
        #[arg(long)]
        last_name: Option<String>,
    },
}

/// Actor display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ActorRow {
    #[tabled(rename = "ID")]
    actor_id: i32,
    #[tabled(rename = "First name")]
    first_name: String,
    #[tabled(rename = "Last name")]
    last_name: String,
    #[tabled(rename = "Last update")]
    last_update: String,
}

impl From<&Actor> for ActorRow {
    fn from(actor: &Actor) -> Self {
        Self {
            actor_id: actor.actor_id.into_inner(),
            first_name: actor.first_name.clone(),
            last_name: actor.last_name.clone(),
            last_update: actor.display_value(ActorColumn::LastUpdate),
        }
    }
}

/// Execute actor commands
pub async fn execute(args: &ActorArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let (db, store) = super::connect_store(&config).await?;
    let service = ActorService::new(store);

    let result = run(&service, &args.command, format).await;
    db.close().await;
    result
}

async fn run(service: &ActorService, command: &ActorCommand, format: OutputFormat) -> Result<(), AppError> {
    match command {
        ActorCommand::List { page, per_page, sort } => {
            let request = page_request(*page, *per_page);
            let page = service
                .page(request, SortField::parse(sort.as_deref()))
                .await?;

            let rows: Vec<ActorRow> = page.items.iter().map(ActorRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!(
                    "Page {} of {} ({} actors)",
                    page.page, page.total_pages, page.total_items
                );
            }
        }
        ActorCommand::Show { id } => {
            let actor = service.get(ActorId(*id)).await?;
            print_actor(&actor, format);
        }
        ActorCommand::Edit {
            id,
            first_name,
            last_name,
        } => {
            let patch = ActorPatch {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            };
            if service.edit(ActorId(*id), &patch).await? {
                output::print_success(&format!("Actor {id} updated"));
            } else {
                println!("Nothing to change.");
            }
        }
    }

    Ok(())
}

fn page_request(page: Option<i64>, per_page: Option<i64>) -> PageRequest {
    let page = page.map(|p| p.to_string());
    let per_page = per_page.map(|p| p.to_string());
    PageRequest::from_raw(page.as_deref(), per_page.as_deref())
}

fn print_actor(actor: &Actor, format: OutputFormat) {
    let fields: Vec<(&str, String)> = ActorColumn::ALL
        .iter()
        .map(|column| (column.title(), actor.display_value(*column)))
        .collect();
    output::print_fields(&ActorRow::from(actor), &fields, format);
}
