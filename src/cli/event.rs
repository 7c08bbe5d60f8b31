//! Event subcommands

use clap::Subcommand;

use super::{payload::PayloadArgs, print_json};
use crate::AdminContext;
use crate::domain::{EventCreate, EventUpdate};

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// List events
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
        /// Only events that have not happened yet
        #[arg(long)]
        upcoming: bool,
    },
    /// Fetch one event
    Get { id: i64 },
    /// Create an event from a JSON payload
    Create {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Update an event from a JSON payload of changed fields
    Update {
        id: i64,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Delete an event
    Delete { id: i64 },
}

pub async fn run(ctx: &AdminContext, command: EventCommand) -> anyhow::Result<()> {
    match command {
        EventCommand::List {
            skip,
            limit,
            upcoming,
        } => {
            let events = ctx.client.list_events(skip, limit, upcoming).await?;
            print_json(&events)
        }
        EventCommand::Get { id } => print_json(&ctx.client.get_event(id).await?),
        EventCommand::Create { payload } => {
            let create: EventCreate = payload.parse()?;
            print_json(&ctx.client.create_event(&create).await?)
        }
        EventCommand::Update { id, payload } => {
            let update: EventUpdate = payload.parse()?;
            print_json(&ctx.client.update_event(id, &update).await?)
        }
        EventCommand::Delete { id } => {
            ctx.client.delete_event(id).await?;
            println!("deleted event {id}");
            Ok(())
        }
    }
}
