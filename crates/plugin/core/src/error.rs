use thiserror::Error;

/// Failures the registry reports to the host.
///
/// A tool's own upstream failures are part of its reply; these cover a call
/// that never reached the tool or a reply that could not be encoded.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("unknown tool `{0}`")]
    UnknownTool(String),

    #[error("invalid arguments for `{tool}`: {reason}")]
    InvalidArgs { tool: &'static str, reason: String },

    #[error("could not encode the reply of `{tool}`: {reason}")]
    Encode { tool: &'static str, reason: String },
}
