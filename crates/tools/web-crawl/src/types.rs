//! Tool inputs and the reply shape returned to the host.

use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input for `search_web`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchWebInput {
    /// 搜索关键字，支持多个关键字用空格分隔，若关键字必须包含则用双引号""包裹，若关键字必须排除则在关键字前加' -'(英文空格减号)
    pub keywords: String,
}

/// Input for `crawl_url`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CrawlUrlInput {
    /// 要提取内容的网页URL，必须以http://或https://开头
    pub url: String,
}

/// Payload handed back to the host for every call, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolReply {
    /// Name of the tool that produced the reply
    pub name: String,
    /// Raw response text, or a prefixed failure message
    pub content: String,
}

/// Result of one upstream call before it is shaped into a [`ToolReply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Response body, verbatim
    Success(String),
    /// Failure message, without the tool's prefix
    Failure(String),
}

impl ToolOutcome {
    /// Absorb an error into a [`ToolOutcome::Failure`].
    pub fn from_result<E: Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(body) => Self::Success(body),
            Err(e) => Self::Failure(e.to_string()),
        }
    }

    /// Shape into the host reply; failures become `"<prefix>: <message>"`.
    #[must_use]
    pub fn into_reply(self, name: &str, failure_prefix: &str) -> ToolReply {
        let content = match self {
            Self::Success(body) => body,
            Self::Failure(message) => format!("{failure_prefix}: {message}"),
        };
        ToolReply {
            name: name.to_string(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_verbatim() {
        let reply = ToolOutcome::Success("OK-RESULT".into()).into_reply("search_web", "搜索失败");
        assert_eq!(
            reply,
            ToolReply {
                name: "search_web".into(),
                content: "OK-RESULT".into()
            }
        );
    }

    #[test]
    fn failure_is_prefixed() {
        let outcome = ToolOutcome::from_result::<&str>(Err("boom"));
        assert_eq!(outcome, ToolOutcome::Failure("boom".into()));
        assert_eq!(
            outcome.into_reply("crawl_url", "内容提取失败").content,
            "内容提取失败: boom"
        );
    }

    #[test]
    fn empty_body_is_still_success() {
        let outcome = ToolOutcome::from_result::<&str>(Ok(String::new()));
        assert_eq!(outcome.into_reply("crawl_url", "内容提取失败").content, "");
    }
}
