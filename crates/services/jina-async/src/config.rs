use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default search endpoint
pub const JINA_SEARCH_BASE: &str = "https://s.jina.ai/";
/// Default reader (content extraction) endpoint
pub const JINA_READER_BASE: &str = "https://r.jina.ai/";

/// Configuration for the Jina client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct JinaConfig {
    search_base: String,
    reader_base: String,
    api_key: Option<SecretString>,
}

impl Default for JinaConfig {
    fn default() -> Self {
        Self {
            search_base: env_trimmed("JINA_SEARCH_URL").unwrap_or_else(|| JINA_SEARCH_BASE.into()),
            reader_base: env_trimmed("JINA_READER_URL").unwrap_or_else(|| JINA_READER_BASE.into()),
            api_key: env_trimmed("JINA_API_KEY").map(SecretString::from),
        }
    }
}

impl JinaConfig {
    /// Creates a new configuration with default settings
    ///
    /// Reads from environment variables:
    /// - `JINA_API_KEY` for bearer authentication
    /// - `JINA_SEARCH_URL` for the search endpoint (defaults to `https://s.jina.ai/`)
    /// - `JINA_READER_URL` for the reader endpoint (defaults to `https://r.jina.ai/`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search endpoint
    #[must_use]
    pub fn with_search_base(mut self, base: impl Into<String>) -> Self {
        self.search_base = base.into();
        self
    }

    /// Sets the reader endpoint
    #[must_use]
    pub fn with_reader_base(mut self, base: impl Into<String>) -> Self {
        self.reader_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Drops any API key, including one read from the environment
    #[must_use]
    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    /// Returns the configured search endpoint
    #[must_use]
    pub fn search_base(&self) -> &str {
        &self.search_base
    }

    /// Returns the configured reader endpoint
    #[must_use]
    pub fn reader_base(&self) -> &str {
        &self.reader_base
    }
}

/// Configuration trait for the Jina client
///
/// Implement this trait to provide custom authentication and endpoints.
pub trait Config: Send + Sync {
    /// Returns the headers sent with every request
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::JinaError>;

    /// Full URL of the search endpoint
    fn search_url(&self) -> String;

    /// Full URL of the reader endpoint
    fn reader_url(&self) -> String;
}

impl Config for JinaConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::JinaError> {
        use crate::error::JinaError;

        let mut h = HeaderMap::new();
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Sent verbatim, even when blank; the service reports the auth failure.
        let key = self
            .api_key
            .as_ref()
            .map_or("", |secret| secret.expose_secret());
        let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|_| JinaError::Config("Invalid Authorization value".into()))?;
        value.set_sensitive(true);
        h.insert(AUTHORIZATION, value);

        Ok(h)
    }

    fn search_url(&self) -> String {
        self.search_base.clone()
    }

    fn reader_url(&self) -> String {
        self.reader_base.clone()
    }
}

fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
