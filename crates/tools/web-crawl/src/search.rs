//! Web search through the Jina search endpoint.

use jina_async::JinaError;
use tracing::info;

use crate::WebCrawl;

/// Search the web for `keywords` and return the raw response body.
///
/// Keywords are forwarded verbatim; quoting and `-exclusion` syntax is left
/// to the service. With `search.crawl_details` off, results carry metadata
/// only.
///
/// # Errors
/// Returns `JinaError` on a non-200 status or a transport failure.
pub async fn search_web(tools: &WebCrawl, keywords: &str) -> Result<String, JinaError> {
    let cfg = &tools.config.search;
    let req = cfg.to_request(keywords);
    let opts = cfg.to_options();

    info!(
        crawl_details = opts.crawl_details,
        gl = ?req.gl,
        hl = ?req.hl,
        "search_web"
    );

    tools.jina.search().create(&req, &opts).await
}
