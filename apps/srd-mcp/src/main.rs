//! # SRD MCP Server
//!
//! Entry point for the MCP (Model Context Protocol) gateway to the 5e SRD API.
//!
//! Configuration, highest precedence first:
//! - flags: `--api-url`, `--timeout-secs`, `--log-format`, `--config`
//! - environment: `SRD_API_URL`, `SRD_TIMEOUT_SECS`, `SRD_LOG_FORMAT`, `SRD_CONFIG`
//! - TOML file
//! - defaults (`https://www.dnd5eapi.co/api`, 10s, text logs)
//!
//! Communicates with AI clients via MCP over stdio.

use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use srd_mcp::cli::Cli;
use srd_mcp::{SrdClient, SrdMcp, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match cli.resolve_config(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            // No subscriber yet; the format itself may be what failed.
            eprintln!("srd-mcp: {e}");
            std::process::exit(2);
        }
    };

    logging::init(config.log_format);

    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.timeout_secs,
        "SRD MCP server starting"
    );

    let client = SrdClient::new(&config.api_url, config.timeout()).inspect_err(|e| {
        tracing::error!("Cannot build HTTP client: {e}");
    })?;
    let mcp = SrdMcp::new(client);

    let service = mcp.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("MCP serve error: {:?}", e);
    })?;

    service.waiting().await?;
    tracing::info!("Client disconnected, shutting down");
    Ok(())
}
