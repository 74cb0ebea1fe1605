//! Error types and handling for webmention-core operations.
//!
//! This module provides the error type covering all failures in endpoint
//! discovery and dispatch. Errors are categorized for easier handling and
//! include context about recoverability for callers that want to retry.
//!
//! ## Error Categories
//!
//! - **Network Errors**: HTTP transport failures, connectivity issues
//! - **Status Errors**: responses outside the 2xx range
//! - **URL Errors**: caller-supplied URLs that cannot be parsed
//! - **Selector Errors**: CSS selectors that fail to compile
//! - **Configuration Errors**: invalid settings or config files
//!
//! Note that a page simply not advertising a webmention endpoint is *not* an
//! error: discovery returns `Ok(None)` in that case. Only transport, status,
//! and malformed-input failures surface through this type.

use thiserror::Error;

/// The main error type for webmention-core operations.
///
/// All public functions in webmention-core return `Result<T, Error>` for
/// consistent error handling. The error type includes automatic conversion
/// from common underlying errors and preserves the full source chain through
/// the `source()` method.
#[derive(Error, Debug)]
pub enum Error {
    /// Network operation failed.
    ///
    /// Covers HTTP requests for probing target URLs and posting
    /// notifications. The underlying `reqwest::Error` is preserved for
    /// detailed connection information.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status outside the 2xx range.
    ///
    /// Carries the status code and the (post-redirect) URL that produced it.
    #[error("HTTP status {status} for {url}")]
    Http {
        /// HTTP status code returned by the server (e.g., 404, 500).
        status: u16,
        /// Final URL of the request, after any redirects.
        url: String,
    },

    /// URL is malformed or invalid.
    ///
    /// Raised for caller-supplied URLs (the page being probed, the resolution
    /// base) that cannot be parsed. Unparseable references *inside* a fetched
    /// document are skipped, not raised.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A CSS selector failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    ///
    /// Covers reading the configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Returns `true` for errors that are typically temporary and might
    /// succeed if the operation is retried after a delay: network timeouts,
    /// connection failures, and 5xx server responses. The core itself never
    /// retries; this is a hint for callers.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status >= 500,
            Self::Io(e) => {
                matches!(
                    e.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
                )
            },
            Self::InvalidUrl(_) | Self::Selector(_) | Self::Config(_) => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful for grouping errors in logs or implementing category-specific
    /// handling.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Http { .. } => "http_status",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Selector(_) => "selector",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
