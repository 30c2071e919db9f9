//! Configuration loader with env overrides.
//!
//! The loading process:
//! 1. Read the TOML document (missing file means defaults)
//! 2. Deserialize into typed [`PluginConfig`], reporting the failing key path
//! 3. Apply env var overrides (highest precedence)
//! 4. Run advisory validation

use crate::{types::PluginConfig, validation::AdvisoryWarning};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::path::{Path, PathBuf};

/// Default config filename, resolved against the working directory.
pub const DEFAULT_FILE: &str = "config.toml";

/// Result of loading configuration.
#[derive(Debug)]
pub struct LoadedPluginConfig {
    /// The loaded configuration.
    pub config: PluginConfig,

    /// Advisory warnings from validation.
    pub warnings: Vec<AdvisoryWarning>,

    /// Path the document was read from (it may not exist).
    pub path: PathBuf,
}

/// Load the plugin configuration from a TOML file.
///
/// A missing file is not an error; defaults (plus env overrides) are used.
pub fn load(path: &Path) -> Result<LoadedPluginConfig> {
    let mut cfg = if path.exists() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        from_toml_str(&raw).with_context(|| format!("Invalid config in {}", path.display()))?
    } else {
        tracing::debug!(path = %path.display(), "config file not found; using defaults");
        PluginConfig::default()
    };

    apply_env_overrides(&mut cfg);

    let warnings = crate::validation::validate(&cfg);

    Ok(LoadedPluginConfig {
        config: cfg,
        warnings,
        path: path.to_path_buf(),
    })
}

/// Parse a TOML document into a [`PluginConfig`] without env overrides.
pub fn from_toml_str(raw: &str) -> Result<PluginConfig> {
    let de = toml::Deserializer::new(raw);
    serde_path_to_error::deserialize(de).map_err(|e| {
        let path = e.path().to_string();
        anyhow::anyhow!("at `{path}`: {}", e.into_inner())
    })
}

/// Apply environment variable overrides to the config.
fn apply_env_overrides(cfg: &mut PluginConfig) {
    if let Some(k) = env_trimmed("JINA_API_KEY") {
        cfg.provider.jina_api_key = Some(SecretString::from(k));
    }
    if let Some(v) = env_trimmed("JINA_SEARCH_URL") {
        cfg.provider.search_endpoint = v;
    }
    if let Some(v) = env_trimmed("JINA_READER_URL") {
        cfg.provider.reader_endpoint = v;
    }
}

/// Helper to read and normalize an env var (trim + filter empty).
fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
