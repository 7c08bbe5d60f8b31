//! DJ subcommands

use clap::Subcommand;

use super::{payload::PayloadArgs, print_json};
use crate::AdminContext;
use crate::domain::{DjCreate, DjUpdate};

#[derive(Debug, Subcommand)]
pub enum DjCommand {
    /// List DJs
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
    /// Fetch one DJ
    Get { id: i64 },
    /// Create a DJ from a JSON payload
    Create {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Update a DJ from a JSON payload of changed fields
    Update {
        id: i64,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Delete a DJ
    Delete { id: i64 },
}

pub async fn run(ctx: &AdminContext, command: DjCommand) -> anyhow::Result<()> {
    match command {
        DjCommand::List { skip, limit } => print_json(&ctx.client.list_djs(skip, limit).await?),
        DjCommand::Get { id } => print_json(&ctx.client.get_dj(id).await?),
        DjCommand::Create { payload } => {
            let create: DjCreate = payload.parse()?;
            print_json(&ctx.client.create_dj(&create).await?)
        }
        DjCommand::Update { id, payload } => {
            let update: DjUpdate = payload.parse()?;
            print_json(&ctx.client.update_dj(id, &update).await?)
        }
        DjCommand::Delete { id } => {
            ctx.client.delete_dj(id).await?;
            println!("deleted dj {id}");
            Ok(())
        }
    }
}
