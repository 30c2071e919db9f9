//! Page-shaping options shared by the search and reader endpoints

use reqwest::header::HeaderMap;

use crate::error::JinaError;
use crate::headers::{
    HDR_ENGINE, HDR_RETAIN_IMAGES, HDR_TIMEOUT, HDR_WITH_GENERATED_ALT, HDR_WITH_IMAGES_SUMMARY,
    HDR_WITH_LINKS_SUMMARY, HeaderRule, apply_rules, flag,
};

/// Fetch engine used by the service to load a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineMode {
    /// Let the service decide (no header sent)
    #[default]
    Default,
    /// Plain HTML fetch
    Fast,
    /// Headless-browser rendered fetch
    Quality,
}

impl EngineMode {
    /// Parse a configuration value; anything other than `fast`/`quality` is `Default`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "fast" => Self::Fast,
            "quality" => Self::Quality,
            _ => Self::Default,
        }
    }

    /// Value of the `X-Engine` header, if one is sent
    #[must_use]
    pub const fn header_value(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Fast => Some("direct"),
            Self::Quality => Some("browser"),
        }
    }
}

/// How a fetched page is loaded and rendered into text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentOptions {
    /// Engine selection
    pub engine: EngineMode,
    /// Load timeout hint in seconds; `<= 0` sends no hint
    pub timeout: i64,
    /// Drop images from the output
    pub remove_images: bool,
    /// Move links to a summary at the end
    pub links_summary: bool,
    /// Move images to a summary at the end
    pub images_summary: bool,
    /// Generate alt text for images
    pub generated_alt: bool,
}

pub(crate) const CONTENT_RULES: &[HeaderRule<ContentOptions>] = &[
    HeaderRule {
        name: HDR_ENGINE,
        value: |o| o.engine.header_value().map(str::to_string),
    },
    HeaderRule {
        name: HDR_TIMEOUT,
        value: |o| (o.timeout > 0).then(|| o.timeout.to_string()),
    },
    HeaderRule {
        name: HDR_RETAIN_IMAGES,
        value: |o| o.remove_images.then(|| "none".to_string()),
    },
    HeaderRule {
        name: HDR_WITH_LINKS_SUMMARY,
        value: |o| flag(o.links_summary),
    },
    HeaderRule {
        name: HDR_WITH_IMAGES_SUMMARY,
        value: |o| flag(o.images_summary),
    },
    HeaderRule {
        name: HDR_WITH_GENERATED_ALT,
        value: |o| flag(o.generated_alt),
    },
];

impl ContentOptions {
    /// Build the page-shaping headers.
    ///
    /// # Errors
    ///
    /// Returns an error if a produced value is not a valid header value.
    pub fn headers(&self) -> Result<HeaderMap, JinaError> {
        apply_rules(self, CONTENT_RULES)
    }
}
