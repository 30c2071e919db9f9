//! API resource implementations for the Jina client

/// Reader API resource
pub mod reader;
/// Search API resource
pub mod search;

pub use reader::Reader;
pub use search::Search;
