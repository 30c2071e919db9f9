use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;

use super::common::ContentOptions;
use crate::error::JinaError;
use crate::headers::HDR_RESPOND_WITH;

/// Configuration sentinel meaning "omit this parameter"
pub const NOT_SPECIFIED: &str = "not-specified";

/// Body of a `POST s.jina.ai/` search
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Keywords, forwarded verbatim (quotes and `-exclusions` included)
    pub q: String,
    /// Country code of the search region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gl: Option<String>,
    /// Language code of the results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
}

impl SearchRequest {
    /// Creates a search for the given keywords
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            gl: None,
            hl: None,
        }
    }

    /// Sets the search region, unless it is [`NOT_SPECIFIED`]
    #[must_use]
    pub fn with_nation(mut self, nation: &str) -> Self {
        self.gl = specified(nation);
        self
    }

    /// Sets the result language, unless it is [`NOT_SPECIFIED`]
    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.hl = specified(language);
        self
    }
}

fn specified(value: &str) -> Option<String> {
    (value != NOT_SPECIFIED).then(|| value.to_string())
}

/// Header options for a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fetch each result page; when false only result metadata is returned
    pub crawl_details: bool,
    /// Page-shaping options, used only with `crawl_details`
    pub content: ContentOptions,
}

impl SearchOptions {
    /// Build the search headers.
    ///
    /// With `crawl_details` these are the page-shaping headers; otherwise the
    /// single `X-Respond-With: no-content` header.
    ///
    /// # Errors
    ///
    /// Returns an error if a produced value is not a valid header value.
    pub fn headers(&self) -> Result<HeaderMap, JinaError> {
        if self.crawl_details {
            return self.content.headers();
        }
        let mut h = HeaderMap::new();
        h.insert(HDR_RESPOND_WITH, HeaderValue::from_static("no-content"));
        Ok(h)
    }
}
