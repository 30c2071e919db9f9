//! Per-call information supplied by the host.

use std::path::{Path, PathBuf};

/// Which plugin a call belongs to and where its settings came from.
#[derive(Debug, Clone)]
pub struct ToolContext {
    plugin: String,
    config_path: Option<PathBuf>,
}

impl ToolContext {
    /// Context for calls made on behalf of `plugin`.
    #[must_use]
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            config_path: None,
        }
    }

    /// Record the configuration file the plugin was loaded from.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Plugin name, as declared in its `[plugin]` section.
    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_plugin_and_path() {
        let ctx = ToolContext::new("cky-web-crawl");
        assert_eq!(ctx.plugin(), "cky-web-crawl");
        assert!(ctx.config_path().is_none());

        let ctx = ctx.with_config_path("/etc/bot/config.toml");
        assert_eq!(ctx.config_path(), Some(Path::new("/etc/bot/config.toml")));
    }
}
