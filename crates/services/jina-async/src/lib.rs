//! Async Jina client for the search (`s.jina.ai`) and reader (`r.jina.ai`) endpoints.
//!
//! Requests carry their options as `X-*` headers built from declarative rule
//! tables (see [`headers`]); responses are returned as raw text.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// Declarative header tables
pub mod headers;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request types and options
pub mod types;

pub use crate::client::Client;
pub use crate::config::JinaConfig;
pub use crate::error::{JinaError, Operation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, JinaConfig};
}
