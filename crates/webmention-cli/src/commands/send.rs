//! Send command implementation.

use std::io::Write;

use anyhow::{Result, bail};
use colored::Colorize;
use inquire::MultiSelect;
use is_terminal::IsTerminal;
use url::Url;
use webmention_core::{Client, Config, parse_base};

use super::resolve_selector;
use crate::cli::SendArgs;

/// Discover the links on a page, select targets, and send webmentions.
///
/// Delivery failures for individual targets are reported and counted but do
/// not abort the remaining targets; the command fails only when nothing was
/// delivered despite attempts.
pub async fn execute(config: &Config, args: SendArgs) -> Result<()> {
    let source = parse_base(&args.url)?;
    match source.scheme() {
        "http" | "https" => {},
        other => bail!("URL scheme '{other}' is not supported ({})", args.url),
    }

    let client = Client::from_config(config)?;
    let selector = resolve_selector(args.selector.as_deref(), config);

    println!("Searching for links from {} to send webmentions to...\n", args.url);
    let links = client
        .discover_links(source.as_str(), Some(selector.as_str()))
        .await?;
    if links.is_empty() {
        println!("No links found.");
        return Ok(());
    }

    let targets = select_targets(links, args.yes)?;
    if targets.is_empty() {
        println!("Nothing selected.");
        return Ok(());
    }

    println!("Sending webmentions...");
    let mut sent = 0usize;
    let mut failed = 0usize;
    for target in &targets {
        print!("  {target} ... ");
        std::io::stdout().flush().ok();

        match notify(&client, &source, target).await {
            Outcome::Sent => {
                println!("{}", "sent".green());
                sent += 1;
            },
            Outcome::NoEndpoint => {
                println!("{}", "no webmention endpoint".yellow());
            },
            Outcome::Failed(message) => {
                println!("{} {message}", "✗".red());
                failed += 1;
            },
        }
    }

    if sent == 0 && failed > 0 {
        bail!("no webmentions were delivered ({failed} failed)");
    }
    Ok(())
}

enum Outcome {
    Sent,
    NoEndpoint,
    Failed(String),
}

async fn notify(client: &Client, source: &Url, target: &Url) -> Outcome {
    let endpoint = match client.discover_endpoint(target.as_str()).await {
        Ok(Some(endpoint)) => endpoint,
        Ok(None) => return Outcome::NoEndpoint,
        Err(err) => return Outcome::Failed(err.to_string()),
    };

    match client
        .send_webmention(&endpoint, source.as_str(), target.as_str())
        .await
    {
        Ok(()) => Outcome::Sent,
        Err(err) => Outcome::Failed(err.to_string()),
    }
}

/// Lets the operator pick which links to notify. `--yes` selects everything;
/// otherwise an interactive multi-select is shown, which requires a
/// terminal.
fn select_targets(links: Vec<Url>, yes: bool) -> Result<Vec<Url>> {
    if yes {
        return Ok(links);
    }
    if !std::io::stdin().is_terminal() {
        bail!("stdin is not a terminal; pass --yes to send to every discovered link");
    }

    let chosen = MultiSelect::new("Select links to send webmentions to:", links).prompt()?;
    Ok(chosen)
}
