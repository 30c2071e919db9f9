//! Tool trait implementations and registry builder.

use std::sync::Arc;

use futures::future::BoxFuture;
use plugin_tools_core::{Tool, ToolContext, ToolError, ToolRegistry};
use tracing::warn;

use crate::WebCrawl;
use crate::types::{CrawlUrlInput, SearchWebInput, ToolOutcome, ToolReply};

/// Prefix of a failed search reply
pub const SEARCH_FAILURE_PREFIX: &str = "搜索失败";
/// Prefix of a failed extraction reply
pub const CRAWL_FAILURE_PREFIX: &str = "内容提取失败";

// ============================================================================
// SearchWebTool
// ============================================================================

/// Tool searching the web for keywords.
#[derive(Clone)]
pub struct SearchWebTool {
    tools: Arc<WebCrawl>,
}

impl SearchWebTool {
    /// Create a new `SearchWebTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<WebCrawl>) -> Self {
        Self { tools }
    }
}

impl Tool for SearchWebTool {
    type Args = SearchWebInput;
    type Reply = ToolReply;

    const NAME: &'static str = "search_web";
    const DESCRIPTION: &'static str = "使用工具 从网络上搜索某关键字的相关网页";

    fn call(
        &self,
        input: Self::Args,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Reply, ToolError>> {
        let tools = Arc::clone(&self.tools);
        let plugin = ctx.plugin().to_string();
        Box::pin(async move {
            let outcome =
                ToolOutcome::from_result(crate::search::search_web(&tools, &input.keywords).await);
            Ok(finish(outcome, &plugin, Self::NAME, SEARCH_FAILURE_PREFIX))
        })
    }
}

// ============================================================================
// CrawlUrlTool
// ============================================================================

/// Tool extracting the content of one web page.
#[derive(Clone)]
pub struct CrawlUrlTool {
    tools: Arc<WebCrawl>,
}

impl CrawlUrlTool {
    /// Create a new `CrawlUrlTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<WebCrawl>) -> Self {
        Self { tools }
    }
}

impl Tool for CrawlUrlTool {
    type Args = CrawlUrlInput;
    type Reply = ToolReply;

    const NAME: &'static str = "crawl_url";
    const DESCRIPTION: &'static str = "使用工具 从指定URL提取网页内容";

    fn call(
        &self,
        input: Self::Args,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Reply, ToolError>> {
        let tools = Arc::clone(&self.tools);
        let plugin = ctx.plugin().to_string();
        Box::pin(async move {
            let outcome = ToolOutcome::from_result(crate::crawl::crawl_url(&tools, &input.url).await);
            Ok(finish(outcome, &plugin, Self::NAME, CRAWL_FAILURE_PREFIX))
        })
    }
}

fn finish(outcome: ToolOutcome, plugin: &str, name: &str, prefix: &str) -> ToolReply {
    if let ToolOutcome::Failure(message) = &outcome {
        warn!(plugin, tool = name, error = %message, "tool call failed; reporting as content");
    }
    outcome.into_reply(name, prefix)
}

// ============================================================================
// Registry Builder
// ============================================================================

/// Build a `ToolRegistry` containing both web-crawl tools.
pub fn build_registry(tools: Arc<WebCrawl>) -> ToolRegistry {
    ToolRegistry::new()
        .with(SearchWebTool::new(Arc::clone(&tools)))
        .with(CrawlUrlTool::new(tools))
}
