//! CLI structure and argument parsing.
//!
//! The CLI follows a command-subcommand pattern with a default command:
//! invoked with a bare URL, `webmention` runs the full discover-select-send
//! flow. Explicit subcommands expose the individual discovery operations.
//!
//! ```bash
//! # Full flow (default command)
//! webmention https://mysite.example/posts/reply
//!
//! # Non-interactive: notify every discovered link
//! webmention send https://mysite.example/posts/reply --yes
//!
//! # Individual operations
//! webmention endpoint https://example.com/post
//! webmention links https://mysite.example/posts/reply --selector ".h-entry"
//! ```

use clap::{Args, Parser, Subcommand};

/// Main CLI structure for the `webmention` command.
#[derive(Parser, Debug)]
#[command(name = "webmention")]
#[command(version)]
#[command(about = "webmention - discover links on a page and send webmentions", long_about = None)]
#[command(override_usage = "webmention [COMMAND] [COMMAND_ARGS]... [OPTIONS]\n       webmention <URL> [OPTIONS]")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source URL to send webmentions for when no explicit command is given
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// CSS selector limiting where links are discovered (empty for the
    /// whole document)
    #[arg(long, value_name = "SELECTOR")]
    pub selector: Option<String>,

    /// Send to every discovered link without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover the links on a page and send webmentions to the selected
    /// targets
    Send(SendArgs),

    /// Print the webmention endpoint advertised by a target URL
    Endpoint {
        /// Target URL to probe
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Print the outbound links discovered on a page
    Links {
        /// Page to discover links on
        #[arg(value_name = "URL")]
        url: String,

        /// CSS selector limiting where links are discovered (empty for the
        /// whole document)
        #[arg(long, value_name = "SELECTOR")]
        selector: Option<String>,
    },
}

/// Arguments for the `send` command.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Source page whose links should be notified
    #[arg(value_name = "URL")]
    pub url: String,

    /// CSS selector limiting where links are discovered (empty for the
    /// whole document)
    #[arg(long, value_name = "SELECTOR")]
    pub selector: Option<String>,

    /// Send to every discovered link without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,
}
