//! Page content extraction through the Jina reader endpoint.

use jina_async::JinaError;
use jina_async::types::ReaderRequest;
use tracing::info;

use crate::WebCrawl;

/// Extract the content of `url` and return the raw response body.
///
/// The URL is not validated locally; a malformed one is rejected upstream.
///
/// # Errors
/// Returns `JinaError` on a non-200 status or a transport failure.
pub async fn crawl_url(tools: &WebCrawl, url: &str) -> Result<String, JinaError> {
    let req = ReaderRequest::new(url);
    let opts = tools.config.extract.to_options();

    info!(%url, "crawl_url");

    tools.jina.reader().read(&req, &opts).await
}
