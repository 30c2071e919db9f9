//! Declarative `X-*` header tables.
//!
//! Each option struct owns a static table of [`HeaderRule`]s. A rule pairs a
//! header name with a formatter that returns `None` when the header must be
//! omitted; [`apply_rules`] evaluates the table in order.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::JinaError;

/// Engine selection (`direct` or `browser`)
pub const HDR_ENGINE: &str = "x-engine";
/// Page load timeout hint in seconds
pub const HDR_TIMEOUT: &str = "x-timeout";
/// Image retention policy
pub const HDR_RETAIN_IMAGES: &str = "x-retain-images";
/// Collect links into a trailing summary
pub const HDR_WITH_LINKS_SUMMARY: &str = "x-with-links-summary";
/// Collect images into a trailing summary
pub const HDR_WITH_IMAGES_SUMMARY: &str = "x-with-images-summary";
/// Generate alt text for images lacking one
pub const HDR_WITH_GENERATED_ALT: &str = "x-with-generated-alt";
/// Response shaping; `no-content` returns result metadata only
pub const HDR_RESPOND_WITH: &str = "x-respond-with";
/// Follow HTTP redirects on the target page
pub const HDR_FOLLOW_REDIRECTS: &str = "x-follow-redirects";
/// Enable custom pre-handler scripts
pub const HDR_USE_CUSTOM_PREHANDLER_SCRIPTS: &str = "x-use-custom-prehandler-scripts";
/// Comma-joined pre-handler script identifiers
pub const HDR_CUSTOM_PREHANDLER_SCRIPTS_LIST: &str = "x-custom-prehandler-scripts-list";
/// Include shadow DOM content
pub const HDR_INCLUDE_SHADOW_DOM: &str = "x-include-shadow-dom";
/// Include iframe content
pub const HDR_INCLUDE_IFRAMES: &str = "x-include-iframes";
/// Extract with the ReaderLM-v2 model
pub const HDR_USE_READERLM_V2: &str = "x-use-readerlm-v2";
/// Shape output for GPT-OSS models
pub const HDR_OPTIMIZE_FOR_GPT_OSS: &str = "x-optimize-for-gpt-oss";

/// One conditional header: emitted when `value` returns `Some`.
pub struct HeaderRule<T> {
    /// Header name (lowercase)
    pub name: &'static str,
    /// Formatter producing the header value, or `None` to omit it
    pub value: fn(&T) -> Option<String>,
}

/// Evaluate a rule table against `source` into a fresh header map.
///
/// # Errors
///
/// Returns [`JinaError::Config`] if a produced value is not a valid header value.
pub fn apply_rules<T>(source: &T, rules: &[HeaderRule<T>]) -> Result<HeaderMap, JinaError> {
    let mut headers = HeaderMap::new();
    for rule in rules {
        let Some(value) = (rule.value)(source) else {
            continue;
        };
        let value = HeaderValue::from_str(&value).map_err(|_| {
            JinaError::Config(format!("Invalid value for header {}: {value:?}", rule.name))
        })?;
        headers.insert(HeaderName::from_static(rule.name), value);
    }
    Ok(headers)
}

/// `Some("true")` when the flag is set.
pub(crate) fn flag(enabled: bool) -> Option<String> {
    enabled.then(|| "true".to_string())
}
