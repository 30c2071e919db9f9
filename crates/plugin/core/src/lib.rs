//! Host-side plumbing for plugin tools.
//!
//! A plugin hands the host a [`ToolRegistry`]. The host lists the
//! [`ToolSpec`]s to the model and routes each call, with JSON arguments and a
//! [`ToolContext`] naming the plugin, to [`ToolRegistry::dispatch`].

pub mod context;
pub mod error;
pub mod registry;
pub mod tool;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolSpec};

pub use futures::future::BoxFuture;
