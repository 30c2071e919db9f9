//! Configuration document for the web-crawl plugin.
//!
//! This crate provides:
//! - [`PluginConfig`]: the root document with `plugin`, `provider`, `search`
//!   and `extract` sections
//! - [`load`]: TOML loading with env overrides and advisory validation
//! - [`schema`]: JSON Schema generation for the document
//! - [`validation`]: advisory validation that produces warnings
//!
//! # Precedence (lowest to highest)
//! 1. Default values
//! 2. The TOML file (`config.toml` by default)
//! 3. Environment variables
//!
//! # Environment Variables
//! - `JINA_API_KEY`: Set the Jina API key
//! - `JINA_SEARCH_URL`: Override the search endpoint
//! - `JINA_READER_URL`: Override the reader endpoint

pub mod loader;
pub mod schema;
pub mod types;
pub mod validation;

pub use loader::{DEFAULT_FILE, LoadedPluginConfig, from_toml_str, load};
pub use schema::schema_json_pretty;
pub use types::{ExtractConfig, PluginConfig, PluginSection, ProviderConfig, SearchConfig};
pub use validation::AdvisoryWarning;
