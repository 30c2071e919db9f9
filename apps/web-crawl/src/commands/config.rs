//! Configuration management commands.
//!
//! Provides init, show, schema and validate subcommands for the plugin's
//! `config.toml`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use clap::Subcommand;
use colored::Colorize;
use web_crawl_config::PluginConfig;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with default values
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration (API key omitted)
    Show {
        /// Output as raw JSON (no formatting)
        #[arg(long)]
        json: bool,
    },

    /// Output the JSON Schema of the configuration document
    Schema,

    /// Validate configuration and show warnings
    Validate,
}

pub fn execute(path: &Path, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init { force } => cmd_init(path, force),
        ConfigCommands::Show { json } => cmd_show(path, json),
        ConfigCommands::Schema => cmd_schema(),
        ConfigCommands::Validate => cmd_validate(path),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\nUse --force to overwrite",
            path.display()
        );
    }

    let doc = toml::to_string_pretty(&PluginConfig::default())?;

    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| f.write_all(doc.as_bytes()))
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    println!(
        "{} Created {}",
        "OK".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

fn cmd_show(path: &Path, json_output: bool) -> Result<()> {
    let loaded = web_crawl_config::load(path)?;

    for warning in &loaded.warnings {
        eprintln!("{} {}", "WARN".yellow(), warning);
    }

    if json_output {
        println!("{}", serde_json::to_string(&loaded.config)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&loaded.config)?);
    }
    Ok(())
}

fn cmd_schema() -> Result<()> {
    println!("{}", web_crawl_config::schema_json_pretty()?);
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let loaded = web_crawl_config::load(path)?;

    if !loaded.path.exists() {
        println!(
            "{} {} not found; using defaults",
            "INFO".blue(),
            loaded.path.display()
        );
    }

    if loaded.warnings.is_empty() {
        println!("{} Configuration is valid", "OK".green());
    } else {
        println!("{} Configuration has warnings:", "WARN".yellow());
        for w in &loaded.warnings {
            println!("  - {w}");
        }
    }
    Ok(())
}
