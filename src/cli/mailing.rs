//! Mailing-list subcommands

use clap::Subcommand;

use super::print_json;
use crate::AdminContext;

#[derive(Debug, Subcommand)]
pub enum MailingCommand {
    /// List mailing-list entries
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        /// Only currently subscribed entries
        #[arg(long)]
        subscribed_only: bool,
    },
    /// Delete an entry
    Delete { id: i64 },
}

pub async fn run(ctx: &AdminContext, command: MailingCommand) -> anyhow::Result<()> {
    match command {
        MailingCommand::List {
            skip,
            limit,
            subscribed_only,
        } => {
            let page = ctx.client.list_mailing(skip, limit, subscribed_only).await?;
            print_json(&page)
        }
        MailingCommand::Delete { id } => {
            ctx.client.delete_mailing_entry(id).await?;
            println!("deleted mailing-list entry {id}");
            Ok(())
        }
    }
}
