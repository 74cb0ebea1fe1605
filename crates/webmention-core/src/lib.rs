//! # webmention-core
//!
//! Core functionality for discovering [Webmention](https://webmention.org)
//! endpoints and sending webmentions.
//!
//! A webmention is a notification that a `source` page mentions a `target`
//! page, delivered as a form-encoded POST to the endpoint the target
//! advertises. This crate implements the discovery side (HTTP `Link`
//! headers, HTML `<link>`/`<a>` elements, HEAD-then-GET probing, relative
//! URL resolution) and the dispatch side (the notification POST).
//!
//! ## Architecture
//!
//! - **Header parsing**: RFC 2616 tokenizer for multi-value `Link` headers
//! - **HTML extraction**: rel-annotated link search and selector-scoped
//!   link collection over a browser-grade document tree
//! - **Discovery**: HEAD/GET orchestration with header-over-body precedence
//!   and resolution against the final post-redirect URL
//! - **Dispatch**: the `source`/`target` form POST
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webmention_core::{Client, Result};
//!
//! # async fn run() -> Result<()> {
//! let client = Client::new()?;
//! let source = "https://mysite.example/reply";
//! let target = "https://example.com/post";
//!
//! if let Some(endpoint) = client.discover_endpoint(target).await? {
//!     client.send_webmention(&endpoint, source, target).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`Result<T, Error>`]. A page that simply does not
//! advertise an endpoint is not an error: discovery returns `Ok(None)`.

/// Configuration loading for the client and CLI defaults
pub mod config;
/// Endpoint discovery and webmention dispatch
pub mod discover;
/// Error types and result aliases
pub mod error;
/// HTTP structured-header tokenization
pub mod header;
/// HTML link extraction
pub mod html;
/// Accepted webmention relation values
pub mod relation;

// Re-export commonly used types
pub use config::Config;
pub use discover::{
    Client, endpoint_from_headers, extract_endpoint, parse_base, resolve_references,
};
pub use error::{Error, Result};
pub use header::Link;
