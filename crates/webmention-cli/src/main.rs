//! webmention CLI - send webmentions for the links on a page.
//!
//! This is the main entry point for the `webmention` command-line tool. It
//! discovers the outbound links of a source page, lets the operator choose
//! which ones to notify, then looks up each target's webmention endpoint
//! and delivers the notification. Command implementations live in separate
//! modules.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;

use cli::{Cli, Commands, SendArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = webmention_core::Config::load()?;

    match cli.command {
        Some(Commands::Send(args)) => commands::send(&config, args).await,
        Some(Commands::Endpoint { url }) => commands::endpoint(&config, &url).await,
        Some(Commands::Links { url, selector }) => {
            commands::links(&config, &url, selector.as_deref()).await
        },
        None => {
            // Default command: send, with the bare URL argument
            if let Some(url) = cli.url {
                let args = SendArgs {
                    url,
                    selector: cli.selector,
                    yes: cli.yes,
                };
                commands::send(&config, args).await
            } else {
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
