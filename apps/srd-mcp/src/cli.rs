//! # SRD MCP CLI
//!
//! Command-line flags of the `srd-mcp` binary and the layering that turns
//! them, the environment and an optional TOML file into one [`Config`].

use clap::Parser;
use srd_core::{Config, LogFormat};
use std::path::PathBuf;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// SRD MCP - D&D 5e System Reference Document over the Model Context Protocol
///
/// Serves MCP over stdio. Logs go to stderr.
#[derive(Parser, Debug, Default)]
#[command(name = "srd-mcp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file (falls back to $SRD_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the SRD API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log format on stderr: "text" or "json"
    #[arg(long, value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse().map_err(|e: srd_core::SrdError| e.to_string())
}

impl Cli {
    /// Resolve the effective configuration.
    ///
    /// Flags win over the environment, which wins over the file, which wins
    /// over the defaults. `lookup` reads environment variables.
    pub fn resolve_config(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> srd_core::Result<Config> {
        let path = self
            .config
            .clone()
            .or_else(|| lookup("SRD_CONFIG").map(PathBuf::from));

        let mut config = Config::load(path.as_deref())?.apply_env(lookup)?;
        if let Some(url) = &self.api_url {
            config.api_url.clone_from(url);
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config.validate()
    }
}
