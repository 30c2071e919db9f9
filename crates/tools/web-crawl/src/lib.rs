//! `search_web` and `crawl_url` plugin tools.

pub mod crawl;
pub mod search;
pub mod tools;
pub mod types;

use web_crawl_config::PluginConfig;

/// Shared state for the web-crawl tools.
///
/// Holds the plugin configuration (read-only at call time) and a Jina client
/// built from its `provider` section.
pub struct WebCrawl {
    /// Loaded plugin configuration
    pub(crate) config: PluginConfig,
    /// Jina search/reader client
    pub(crate) jina: jina_async::Client<jina_async::JinaConfig>,
}

impl WebCrawl {
    /// Create the tool state from a configuration document.
    #[must_use]
    pub fn new(config: PluginConfig) -> Self {
        let jina = jina_async::Client::with_config(config.provider.to_jina_config());
        Self { config, jina }
    }

    /// Create the tool state with a caller-supplied client.
    #[must_use]
    pub const fn with_client(
        config: PluginConfig,
        jina: jina_async::Client<jina_async::JinaConfig>,
    ) -> Self {
        Self { config, jina }
    }

    /// The configuration the tools run with.
    #[must_use]
    pub const fn config(&self) -> &PluginConfig {
        &self.config
    }
}

pub use tools::build_registry;
