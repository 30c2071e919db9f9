//! Tool invocation commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use plugin_tools_core::{ToolContext, ToolRegistry};
use web_crawl_config::{LoadedPluginConfig, PluginConfig};
use web_crawl_tools::WebCrawl;

fn load(path: &Path) -> Result<LoadedPluginConfig> {
    tracing::debug!(path = %path.display(), "loading plugin config");
    let loaded = web_crawl_config::load(path)?;
    for warning in &loaded.warnings {
        eprintln!("{} {}", "WARN".yellow(), warning);
    }
    Ok(loaded)
}

fn registry(config: PluginConfig) -> ToolRegistry {
    web_crawl_tools::build_registry(Arc::new(WebCrawl::new(config)))
}

/// Run one tool call and print its `{name, content}` reply.
pub async fn call(path: &Path, tool: &str, args: serde_json::Value) -> Result<()> {
    let loaded = load(path)?;

    // A host does not register a disabled plugin's tools.
    if !loaded.config.plugin.enabled {
        anyhow::bail!(
            "Plugin '{}' is disabled\nSet `enabled = true` under [plugin] in {}",
            loaded.config.plugin.name,
            loaded.path.display()
        );
    }

    let ctx = ToolContext::new(loaded.config.plugin.name.as_str()).with_config_path(loaded.path);
    let registry = registry(loaded.config);
    let reply = registry
        .dispatch(tool, args, &ctx)
        .await
        .with_context(|| format!("Tool call '{tool}' failed"))?;

    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

/// Print every registered tool with its description and parameter schema.
pub fn list(path: &Path) -> Result<()> {
    let registry = registry(load(path)?.config);
    let tools: Vec<_> = registry.specs().collect();

    println!("{}", serde_json::to_string_pretty(&tools)?);
    Ok(())
}
