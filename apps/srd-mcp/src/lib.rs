//! # srd-mcp
//!
//! MCP (Model Context Protocol) gateway to the 5e SRD REST API.
//!
//! ```text
//! Claude/GPT <--MCP (stdio)--> srd-mcp <--HTTP GET--> dnd5eapi.co
//! ```
//!
//! - [`client`]: fetch-and-decode over reqwest
//! - [`server`]: the rmcp tool router and `ServerHandler`
//! - [`cli`] and [`logging`]: process startup

pub mod cli;
pub mod client;
pub mod logging;
pub mod server;

pub use client::{ClientError, SrdClient};
pub use server::SrdMcp;
