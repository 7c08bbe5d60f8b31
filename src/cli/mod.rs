//! CLI module for the Azulu admin tool
//!
//! One subcommand group per backend resource, plus the session commands
//! (`login`, `logout`, `status`). Handlers print the returned records as
//! pretty JSON; error rendering by failure class happens in `main`.

pub mod auth;
pub mod content;
pub mod dj;
pub mod event;
pub mod mailing;
pub mod media;
mod payload;

use clap::{Parser, Subcommand};

/// Azulu admin - manage events, DJs, content and the mailing list
#[derive(Parser)]
#[command(name = "azulu-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a password against the backend and store it for later calls
    Login(auth::LoginArgs),

    /// Drop the stored password
    Logout,

    /// Report whether the stored credential is currently valid
    Status,

    /// Manage events
    #[command(subcommand)]
    Event(event::EventCommand),

    /// Manage DJs
    #[command(subcommand)]
    Dj(dj::DjCommand),

    /// Manage keyed site content
    #[command(subcommand)]
    Content(content::ContentCommand),

    /// Inspect the mailing list
    #[command(subcommand)]
    Mailing(mailing::MailingCommand),

    /// Upload media files
    #[command(subcommand)]
    Media(media::MediaCommand),
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
