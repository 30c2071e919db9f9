use thiserror::Error;

/// Upstream operation a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `s.jina.ai` keyword search
    Search,
    /// `r.jina.ai` page content extraction
    Read,
}

impl Operation {
    /// Label used in user-facing failure messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "搜索",
            Self::Read => "内容提取",
        }
    }
}

/// Errors that can occur when using the Jina API client
#[derive(Debug, Error)]
pub enum JinaError {
    /// Upstream answered with a status other than 200
    #[error("{}请求失败，状态码: {status}", .operation.label())]
    Status {
        /// Which endpoint was called
        operation: Operation,
        /// HTTP status code returned
        status: u16,
    },

    /// HTTP transport error (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Configuration error (e.g., a header value with invalid characters)
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl JinaError {
    /// Status code of a non-200 response, if this error carries one
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Reqwest(_) | Self::Config(_) => None,
        }
    }
}
