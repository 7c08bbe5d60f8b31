//! Media subcommands

use std::path::PathBuf;

use clap::Subcommand;

use super::print_json;
use crate::AdminContext;

#[derive(Debug, Subcommand)]
pub enum MediaCommand {
    /// Upload an image and print its public URL
    Upload { file: PathBuf },
    /// Fetch upload-signature parameters for a client-side upload
    Signature,
}

pub async fn run(ctx: &AdminContext, command: MediaCommand) -> anyhow::Result<()> {
    match command {
        MediaCommand::Upload { file } => {
            let url = ctx.uploader.upload_image(&file).await?;
            println!("{url}");
            Ok(())
        }
        MediaCommand::Signature => print_json(&ctx.client.upload_signature().await?),
    }
}
