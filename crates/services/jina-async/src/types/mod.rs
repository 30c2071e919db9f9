//! Request types and per-endpoint options for the Jina API

/// Options shared by search detail fetching and the reader
pub mod common;
/// Reader (`r.jina.ai`) request and options
pub mod reader;
/// Search (`s.jina.ai`) request and options
pub mod search;

pub use common::{ContentOptions, EngineMode};
pub use reader::{ReaderOptions, ReaderRequest};
pub use search::{NOT_SPECIFIED, SearchOptions, SearchRequest};
