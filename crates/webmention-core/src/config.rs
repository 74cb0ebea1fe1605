//! Configuration for the webmention client.
//!
//! Settings are stored in TOML and loaded from the platform config
//! directory, with a `WEBMENTION_CONFIG` environment variable override for
//! the file path. A missing file yields defaults; a malformed file is an
//! error.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [fetch]
//! timeout_secs = 10
//! user_agent = "my-site-bot/1.0"
//!
//! [discovery]
//! selector = ".h-entry"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Configuration for the webmention client and CLI defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP transport settings.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Link discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// HTTP transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds. Applies to every outbound request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Overrides the default `webmention/<version>` user agent.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Link discovery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// CSS selector scoping link discovery when the caller does not pass
    /// one explicitly (e.g. `.h-entry`).
    #[serde(default)]
    pub selector: Option<String>,
}

impl Config {
    /// Loads configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Resolves the config file path: `WEBMENTION_CONFIG` if set, otherwise
    /// `config.toml` in the platform config directory.
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("WEBMENTION_CONFIG") {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("", "", "webmention")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.fetch.user_agent.is_none());
        assert!(config.discovery.selector.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[fetch]\ntimeout_secs = 5\n\n[discovery]\nselector = \".h-entry\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.discovery.selector.as_deref(), Some(".h-entry"));
        assert!(config.fetch.user_agent.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fetch]\nuser_agent = \"bot/1.0\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.user_agent.as_deref(), Some("bot/1.0"));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not [ valid toml").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert_eq!(err.category(), "config");
    }
}
