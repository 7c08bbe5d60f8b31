//! Content subcommands

use clap::Subcommand;

use super::{payload::PayloadArgs, print_json};
use crate::AdminContext;
use crate::domain::{ContentCreate, ContentUpdate};

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// List content records
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
    /// Fetch one record by key
    Get { key: String },
    /// Create a record from a JSON payload
    Create {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Update a record from a JSON payload of changed fields
    Update {
        key: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Delete a record by key
    Delete { key: String },
}

pub async fn run(ctx: &AdminContext, command: ContentCommand) -> anyhow::Result<()> {
    match command {
        ContentCommand::List { skip, limit } => {
            print_json(&ctx.client.list_content(skip, limit).await?)
        }
        ContentCommand::Get { key } => print_json(&ctx.client.get_content(&key).await?),
        ContentCommand::Create { payload } => {
            let create: ContentCreate = payload.parse()?;
            print_json(&ctx.client.create_content(&create).await?)
        }
        ContentCommand::Update { key, payload } => {
            let update: ContentUpdate = payload.parse()?;
            print_json(&ctx.client.update_content(&key, &update).await?)
        }
        ContentCommand::Delete { key } => {
            ctx.client.delete_content(&key).await?;
            println!("deleted content '{key}'");
            Ok(())
        }
    }
}
