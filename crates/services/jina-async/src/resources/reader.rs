use crate::{
    client::Client,
    config::Config,
    error::{JinaError, Operation},
    types::reader::{ReaderOptions, ReaderRequest},
};

/// API resource for the reader (content extraction) endpoint
pub struct Reader<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Reader<'c, C> {
    /// Creates a new Reader resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Extract a page's content and return the raw response body
    ///
    /// # Errors
    ///
    /// Returns [`JinaError::Status`] for any non-200 response, or a transport error.
    pub async fn read(&self, req: &ReaderRequest, opts: &ReaderOptions) -> Result<String, JinaError> {
        let headers = opts.headers()?;
        self.client
            .post_text(Operation::Read, self.client.config().reader_url(), headers, req)
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Reader API resource
    #[must_use]
    pub const fn reader(&self) -> Reader<'_, C> {
        Reader::new(self)
    }
}
