//! # srd-core
//!
//! The domain layer of the SRD gateway.
//!
//! This crate knows everything about the 5e SRD API *except* how to reach it:
//! which categories exist, what their payloads look like, how tool arguments
//! become indexes and query strings, and how replies are shaped. The
//! `srd-mcp` application does the I/O and calls into here for the rest.
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO network dependencies (pure Rust)
//! - Upstream payloads are decoded leniently: missing fields default, unknown
//!   fields are ignored
//! - The category set is closed: adding one is a code change

// =============================================================================
// MODULES
// =============================================================================

pub mod category;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod query;
pub mod schema;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use category::Category;
pub use config::{Config, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, LogFormat};
pub use error::{Result, SrdError};
pub use query::{ListFilter, MonsterFilter, SpellFilter, format_challenge_rating, to_index};
pub use schema::{flatten_input_schema, input_schema_for};
