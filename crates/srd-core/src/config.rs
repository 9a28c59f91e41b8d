//! # Configuration
//!
//! Settings for the server process. Layers, lowest first:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config` or `SRD_CONFIG`)
//! 3. Environment (`SRD_API_URL`, `SRD_TIMEOUT_SECS`, `SRD_LOG_FORMAT`)
//! 4. Command-line flags (applied by the binary)
//!
//! ```toml
//! api_url = "https://www.dnd5eapi.co/api"
//! timeout_secs = 10
//! log_format = "json"
//! ```

use crate::error::{Result, SrdError};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Public instance of the 5e SRD API.
pub const DEFAULT_API_URL: &str = "https://www.dnd5eapi.co/api";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// LOG FORMAT
// =============================================================================

/// Shape of the log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = SrdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SrdError::Config(format!(
                "unknown log format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

impl TryFrom<String> for LogFormat {
    type Error = SrdError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the upstream API, without a trailing path separator.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Parse a TOML document. Keys that are absent keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SrdError::Config(e.to_string()))
    }

    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .map_err(|e| SrdError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Override fields from environment-style variables.
    ///
    /// `lookup` is `std::env::var(..).ok()` in the binary; tests pass a map.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup("SRD_API_URL") {
            self.api_url = url;
        }
        if let Some(secs) = lookup("SRD_TIMEOUT_SECS") {
            self.timeout_secs = secs.trim().parse().map_err(|_| {
                SrdError::Config(format!("SRD_TIMEOUT_SECS is not a number: '{secs}'"))
            })?;
        }
        if let Some(format) = lookup("SRD_LOG_FORMAT") {
            self.log_format = format.parse()?;
        }
        Ok(self)
    }

    /// Reject settings the server cannot run with and normalize the URL.
    pub fn validate(mut self) -> Result<Self> {
        let trimmed = self.api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(SrdError::Config("api_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(SrdError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_public_api() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://www.dnd5eapi.co/api");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("log_format = \"JSON\"").unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("api_uri = \"x\"").unwrap_err();
        assert!(matches!(err, SrdError::Config(_)));
    }

    #[test]
    fn bad_log_format_in_toml_is_rejected() {
        assert!(Config::from_toml_str("log_format = \"xml\"").is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"http://localhost:3000/api\"").unwrap();
        writeln!(file, "timeout_secs = 3").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.api_url, "http://localhost:3000/api");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn load_without_path_is_default() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn env_overrides_file_values() {
        let config = Config::from_toml_str("timeout_secs = 3")
            .unwrap()
            .apply_env(env(&[
                ("SRD_API_URL", "http://mirror/api"),
                ("SRD_TIMEOUT_SECS", " 30 "),
                ("SRD_LOG_FORMAT", "json"),
            ]))
            .unwrap();
        assert_eq!(config.api_url, "http://mirror/api");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn env_with_bad_timeout_fails() {
        let err = Config::default()
            .apply_env(env(&[("SRD_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("SRD_TIMEOUT_SECS"));
    }

    #[test]
    fn validate_trims_trailing_slash() {
        let config = Config {
            api_url: "http://localhost/api/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.validate().unwrap().api_url, "http://localhost/api");
    }

    #[test]
    fn validate_rejects_zero_timeout_and_empty_url() {
        let zero = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(zero.validate().is_err());

        let empty = Config {
            api_url: " / ".to_string(),
            ..Config::default()
        };
        assert!(empty.validate().is_err());
    }
}
