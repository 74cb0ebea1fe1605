//! Links command implementation.

use anyhow::Result;
use webmention_core::{Client, Config};

use super::resolve_selector;

/// Prints the outbound links discovered on `url`, one per line.
pub async fn execute(config: &Config, url: &str, selector: Option<&str>) -> Result<()> {
    let client = Client::from_config(config)?;
    let selector = resolve_selector(selector, config);

    let links = client.discover_links(url, Some(selector.as_str())).await?;
    for link in links {
        println!("{link}");
    }
    Ok(())
}
