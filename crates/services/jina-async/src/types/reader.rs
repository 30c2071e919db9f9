use reqwest::header::HeaderMap;
use serde::Serialize;

use super::common::ContentOptions;
use crate::error::JinaError;
use crate::headers::{
    HDR_CUSTOM_PREHANDLER_SCRIPTS_LIST, HDR_FOLLOW_REDIRECTS, HDR_INCLUDE_IFRAMES,
    HDR_INCLUDE_SHADOW_DOM, HDR_OPTIMIZE_FOR_GPT_OSS, HDR_USE_CUSTOM_PREHANDLER_SCRIPTS,
    HDR_USE_READERLM_V2, HeaderRule, apply_rules, flag,
};

/// Body of a `POST r.jina.ai/` content extraction
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReaderRequest {
    /// Absolute http(s) URL of the page; not validated locally
    pub url: String,
}

impl ReaderRequest {
    /// Creates an extraction request for the given URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Header options for content extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Page-shaping options
    pub content: ContentOptions,
    /// Follow redirects on the target page
    pub follow_redirects: bool,
    /// Run custom pre-handler scripts
    pub use_prehandler_scripts: bool,
    /// Script identifiers, sent only when `use_prehandler_scripts` is set
    pub prehandler_scripts: Vec<String>,
    /// Include shadow DOM content
    pub include_shadow_dom: bool,
    /// Include iframe content
    pub include_iframes: bool,
    /// Extract with ReaderLM-v2
    pub use_readerlm_v2: bool,
    /// Optimize output for GPT-OSS models
    pub optimize_for_gpt_oss: bool,
}

const READER_RULES: &[HeaderRule<ReaderOptions>] = &[
    HeaderRule {
        name: HDR_FOLLOW_REDIRECTS,
        value: |o| flag(o.follow_redirects),
    },
    HeaderRule {
        name: HDR_USE_CUSTOM_PREHANDLER_SCRIPTS,
        value: |o| flag(o.use_prehandler_scripts),
    },
    HeaderRule {
        name: HDR_CUSTOM_PREHANDLER_SCRIPTS_LIST,
        value: |o| {
            (o.use_prehandler_scripts && !o.prehandler_scripts.is_empty())
                .then(|| o.prehandler_scripts.join(","))
        },
    },
    HeaderRule {
        name: HDR_INCLUDE_SHADOW_DOM,
        value: |o| flag(o.include_shadow_dom),
    },
    HeaderRule {
        name: HDR_INCLUDE_IFRAMES,
        value: |o| flag(o.include_iframes),
    },
    HeaderRule {
        name: HDR_USE_READERLM_V2,
        value: |o| flag(o.use_readerlm_v2),
    },
    HeaderRule {
        name: HDR_OPTIMIZE_FOR_GPT_OSS,
        value: |o| flag(o.optimize_for_gpt_oss),
    },
];

impl ReaderOptions {
    /// Build the extraction headers: page-shaping headers plus reader-only toggles.
    ///
    /// # Errors
    ///
    /// Returns an error if a produced value is not a valid header value.
    pub fn headers(&self) -> Result<HeaderMap, JinaError> {
        let mut headers = self.content.headers()?;
        headers.extend(apply_rules(self, READER_RULES)?);
        Ok(headers)
    }
}
