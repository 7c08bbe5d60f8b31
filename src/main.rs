use clap::Parser;

use azulu_admin::cli::{self, Cli, Command};
use azulu_admin::domain::DomainError;
use azulu_admin::infrastructure::logging;
use azulu_admin::{AppConfig, create_admin_context};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(2);
        }
    };

    logging::init_logging(&config.logging);

    let ctx = create_admin_context(&config);

    let result = match cli.command {
        Command::Login(args) => cli::auth::login(&ctx, args).await,
        Command::Logout => cli::auth::logout(&ctx).await,
        Command::Status => cli::auth::status(&ctx).await,
        Command::Event(command) => cli::event::run(&ctx, command).await,
        Command::Dj(command) => cli::dj::run(&ctx, command).await,
        Command::Content(command) => cli::content::run(&ctx, command).await,
        Command::Mailing(command) => cli::mailing::run(&ctx, command).await,
        Command::Media(command) => cli::media::run(&ctx, command).await,
    };

    if let Err(e) = result {
        // One line per failure class so a connectivity problem, a rejected
        // credential and a rejected request read differently.
        match e.downcast_ref::<DomainError>() {
            Some(DomainError::Network { message }) => {
                eprintln!("cannot reach the backend: {message}");
            }
            Some(DomainError::Unauthorized { .. }) => {
                eprintln!("not authorized: the admin password is missing or invalid (run `azulu-admin login`)");
            }
            Some(DomainError::Api { status, detail }) => {
                eprintln!("the backend rejected the request ({status}): {detail}");
            }
            Some(other) => eprintln!("{other}"),
            None => eprintln!("{e}"),
        }
        std::process::exit(1);
    }
}
