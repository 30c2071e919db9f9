use crate::{
    client::Client,
    config::Config,
    error::{JinaError, Operation},
    types::search::{SearchOptions, SearchRequest},
};

/// API resource for the search endpoint
pub struct Search<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Search<'c, C> {
    /// Creates a new Search resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Execute a search and return the raw response body
    ///
    /// # Errors
    ///
    /// Returns [`JinaError::Status`] for any non-200 response, or a transport error.
    pub async fn create(&self, req: &SearchRequest, opts: &SearchOptions) -> Result<String, JinaError> {
        let headers = opts.headers()?;
        self.client
            .post_text(Operation::Search, self.client.config().search_url(), headers, req)
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Search API resource
    #[must_use]
    pub const fn search(&self) -> Search<'_, C> {
        Search::new(self)
    }
}
