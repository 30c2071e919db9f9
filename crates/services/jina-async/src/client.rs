use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{JinaError, Operation};

/// Jina API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and endpoints. Unless a shared HTTP client is injected with
/// [`Client::with_http_client`], every request runs on its own short-lived
/// `reqwest::Client` that is dropped before the call returns.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: Option<reqwest::Client>,
    config: C,
}

impl Client<crate::config::JinaConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication and endpoints:
    /// - `JINA_API_KEY`
    /// - `JINA_SEARCH_URL` / `JINA_READER_URL`
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::JinaConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    #[must_use]
    pub const fn with_config(config: C) -> Self {
        Self { http: None, config }
    }

    /// Reuse one HTTP client for every request instead of one per call
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// POST a JSON body and return the response text on 200.
    pub(crate) async fn post_text<I>(
        &self,
        operation: Operation,
        url: String,
        extra_headers: HeaderMap,
        body: &I,
    ) -> Result<String, JinaError>
    where
        I: Serialize + Sync,
    {
        let mut headers = self.config.headers()?;
        headers.extend(extra_headers);

        debug!(
            ?operation,
            %url,
            options = ?headers
                .keys()
                .filter(|name| name.as_str().starts_with("x-"))
                .map(reqwest::header::HeaderName::as_str)
                .collect::<Vec<_>>(),
            "sending jina request"
        );

        // Per-call session: dropped on every return path below
        let http = match &self.http {
            Some(shared) => shared.clone(),
            None => session()?,
        };

        let response = http.post(url).headers(headers).json(body).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(JinaError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

fn session() -> Result<reqwest::Client, JinaError> {
    Ok(reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(10))
        .build()?)
}
