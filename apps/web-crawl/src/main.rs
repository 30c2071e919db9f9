//! Command-line host for the web-crawl plugin.
//!
//! Loads `config.toml`, registers the `search_web` and `crawl_url` tools and
//! runs one tool call per invocation, printing the `{name, content}` reply.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "web-crawl")]
#[command(about = "Web search and page extraction through the Jina APIs")]
#[command(version)]
struct Cli {
    /// Plugin configuration file
    #[arg(long, global = true, env = "WEB_CRAWL_CONFIG", default_value = web_crawl_config::DEFAULT_FILE)]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the web for keywords (search_web)
    Search {
        /// Keywords; quote phrases that must match, prefix exclusions with '-'
        keywords: String,
    },
    /// Extract the content of a web page (crawl_url)
    Crawl {
        /// Page URL, starting with http:// or https://
        url: String,
    },
    /// Call a tool by name with JSON arguments
    Call {
        /// Tool name
        tool: String,
        /// Arguments as a JSON object
        args: String,
    },
    /// List the registered tools and their input schemas
    ListTools,
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "web_crawl=info",
        1 => "web_crawl=debug,jina_async=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search { keywords } => {
            let args = serde_json::json!({ "keywords": keywords });
            commands::tools::call(&cli.config, "search_web", args).await
        }
        Commands::Crawl { url } => {
            let args = serde_json::json!({ "url": url });
            commands::tools::call(&cli.config, "crawl_url", args).await
        }
        Commands::Call { tool, args } => {
            let args = serde_json::from_str(&args)
                .map_err(|e| anyhow::anyhow!("Arguments are not valid JSON: {e}"))?;
            commands::tools::call(&cli.config, &tool, args).await
        }
        Commands::ListTools => commands::tools::list(&cli.config),
        Commands::Config { command } => commands::config::execute(&cli.config, command),
    }
}
