//! Endpoint command implementation.

use anyhow::{Result, bail};
use webmention_core::{Client, Config};

/// Prints the webmention endpoint advertised by `url`.
pub async fn execute(config: &Config, url: &str) -> Result<()> {
    let client = Client::from_config(config)?;

    match client.discover_endpoint(url).await? {
        Some(endpoint) => {
            println!("{endpoint}");
            Ok(())
        },
        None => bail!("no webmention endpoint found for {url}"),
    }
}
