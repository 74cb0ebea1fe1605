//! Command implementations for the webmention CLI.

mod endpoint;
mod links;
mod send;

pub use endpoint::execute as endpoint;
pub use links::execute as links;
pub use send::execute as send;

use webmention_core::Config;

/// Selector applied when neither the command line nor the config file names
/// one. Matches the common microformats2 entry container.
const DEFAULT_SELECTOR: &str = ".h-entry";

/// Resolves the discovery selector: command line flag, then config file,
/// then the default. An empty string disables scoping (whole document).
fn resolve_selector(flag: Option<&str>, config: &Config) -> String {
    flag.map(str::to_owned)
        .or_else(|| config.discovery.selector.clone())
        .unwrap_or_else(|| DEFAULT_SELECTOR.to_owned())
}
