//! Endpoint discovery and webmention dispatch.
//!
//! The [`Client`] wraps an HTTP transport and implements the discovery state
//! machine: probe a target with HEAD (header-advertised endpoints avoid
//! downloading the body), fall back to GET (body-based discovery needs the
//! HTML), merge header- and body-based candidates with header precedence,
//! and resolve the winning reference against the final post-redirect URL.

use reqwest::Method;
use reqwest::header::{HeaderMap, LINK};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::{header, html, relation};

const USER_AGENT: &str = concat!("webmention/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for discovering webmention endpoints and sending
/// notifications.
///
/// Each operation is a single sequential exchange of at most two requests;
/// there is no batching, caching, or retrying. Redirects are followed by the
/// transport, and discovered references are resolved against the final URL.
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    /// Creates a client with the default transport configuration.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { http })
    }

    /// Creates a client from loaded [`Config`] values.
    pub fn from_config(config: &Config) -> Result<Self> {
        let builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch.timeout_secs))
            .user_agent(config.fetch.user_agent.as_deref().unwrap_or(USER_AGENT))
            .gzip(true)
            .brotli(true);
        Ok(Self {
            http: builder.build().map_err(Error::Network)?,
        })
    }

    /// Wraps a caller-configured transport.
    ///
    /// The substituted client controls timeouts, redirect policy, proxies,
    /// and TLS; discovery relies on redirects being followed (the transport
    /// default).
    #[must_use]
    pub const fn from_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Discovers the webmention endpoint advertised by `target`.
    ///
    /// Probes with HEAD first, then falls back to GET. A non-2xx status or
    /// transport failure on one attempt does not abort discovery; the next
    /// method is tried. Returns `Ok(None)` when at least one attempt
    /// succeeded but no endpoint is advertised, and the last error when
    /// every attempt failed.
    pub async fn discover_endpoint(&self, target: &str) -> Result<Option<Url>> {
        let mut last_err = None;
        let mut fetched = false;

        for method in [Method::HEAD, Method::GET] {
            match self.try_discover(method.clone(), target).await {
                Ok(Some(endpoint)) => {
                    info!("webmention endpoint for {target}: {endpoint}");
                    return Ok(Some(endpoint));
                },
                Ok(None) => fetched = true,
                Err(err) => {
                    debug!("{method} {target} failed: {err}");
                    last_err = Some(err);
                },
            }
        }

        match last_err {
            Some(err) if !fetched => Err(err),
            _ => {
                debug!("no webmention endpoint advertised by {target}");
                Ok(None)
            },
        }
    }

    /// One discovery attempt with a single request method.
    async fn try_discover(&self, method: Method, target: &str) -> Result<Option<Url>> {
        let response = self.http.request(method, target).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        // Resolution base is the final URL, after any redirects.
        let base = response.url().clone();
        let headers = response.headers().clone();
        let body = response.text().await?;

        let Some(reference) = extract_endpoint(&headers, &body) else {
            return Ok(None);
        };
        let endpoint = base
            .join(&reference)
            .map_err(|err| Error::InvalidUrl(format!("{reference}: {err}")))?;
        Ok(Some(endpoint))
    }

    /// Discovers the URLs that the resource at `url` links to.
    ///
    /// These are the candidates for sending webmentions to. `selector`
    /// optionally scopes collection to a subtree (e.g. `.h-entry`); pass
    /// `None` or an empty selector for the whole document. References that
    /// fail to parse as URLs are skipped.
    pub async fn discover_links(&self, url: &str, selector: Option<&str>) -> Result<Vec<Url>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let base = response.url().clone();
        let body = response.text().await?;
        let references = html::collect_links(&body, selector)?;
        debug!("{} candidate links at {base}", references.len());
        Ok(resolve_references(&base, &references))
    }

    /// Sends a webmention to `endpoint`, indicating that `source` mentions
    /// `target`.
    ///
    /// The notification is a form-encoded POST carrying exactly the `source`
    /// and `target` fields. A non-2xx response is an error carrying the
    /// status; no retries are attempted.
    pub async fn send_webmention(&self, endpoint: &Url, source: &str, target: &str) -> Result<()> {
        info!("sending webmention to {endpoint}: {source} -> {target}");
        let response = self
            .http
            .post(endpoint.clone())
            .form(&[("source", source), ("target", target)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: endpoint.to_string(),
            });
        }
        Ok(())
    }
}

/// Extracts the endpoint reference from one HTTP response.
///
/// `Link` headers win unconditionally over the body; the body is only
/// inspected when no header advertises the relation. The returned reference
/// is unresolved and may be empty (a reference to the document itself).
#[must_use]
pub fn extract_endpoint(headers: &HeaderMap, body: &str) -> Option<String> {
    if let Some(reference) = endpoint_from_headers(headers) {
        return Some(reference);
    }
    html::find_webmention_link(body)
}

/// Returns the reference of the first `Link` header item carrying a
/// webmention relation, in header-occurrence then list order.
#[must_use]
pub fn endpoint_from_headers(headers: &HeaderMap) -> Option<String> {
    let values = headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok());
    for item in header::parse_list(values) {
        let link = header::parse_link(item);
        if link.rel.iter().any(|rel| relation::is_webmention(rel)) {
            return Some(link.href);
        }
    }
    None
}

/// Parses the caller's own URL as a resolution base.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when the base does not parse; unlike the
/// references resolved against it, an invalid base is a hard error.
pub fn parse_base(base: &str) -> Result<Url> {
    Url::parse(base).map_err(|err| Error::InvalidUrl(format!("{base}: {err}")))
}

/// Resolves each reference against `base` per standard relative-URL
/// resolution, preserving order.
///
/// References that fail to parse are dropped, not raised: a page may carry
/// malformed `href` values without aborting discovery of the rest. An empty
/// reference resolves to the base document itself.
#[must_use]
pub fn resolve_references(base: &Url, references: &[String]) -> Vec<Url> {
    let mut resolved = Vec::with_capacity(references.len());
    for reference in references {
        match base.join(reference) {
            Ok(url) => resolved.push(url),
            Err(err) => warn!("skipping unresolvable reference {reference:?}: {err}"),
        }
    }
    resolved
}
