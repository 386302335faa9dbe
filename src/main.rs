//! # Knowbase — keyword knowledge base server
//!
//! Serves a search page and answers keyword queries against a small
//! in-memory topic table.
//!
//! Usage:
//!   knowbase                              # Start server (default port 3000)
//!   knowbase serve --port 8080            # Custom port
//!   knowbase search "什么是AI"             # One-off query, JSON to stdout
//!   knowbase topics                       # List topics and keywords

use anyhow::Result;
use clap::{Parser, Subcommand};
use knowbase_core::KnowbaseConfig;
use knowbase_knowledge::KnowledgeStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "knowbase", version, about = "Keyword knowledge base server")]
struct Cli {
    /// Config file (default: $KNOWBASE_CONFIG or ~/.knowbase/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// TOML topic table replacing the built-in topics
    #[arg(long, global = true)]
    topics: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config and $PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory served for unmatched GET paths
        #[arg(long)]
        static_dir: Option<String>,
    },
    /// Run one query and print the results as JSON
    Search {
        query: String,
    },
    /// List topics and their keywords
    Topics,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

fn load_config(path: Option<&Path>) -> Result<KnowbaseConfig> {
    match path {
        Some(path) => {
            let mut config = KnowbaseConfig::load_from(path)?;
            config.apply_env_overrides();
            Ok(config)
        }
        None => Ok(KnowbaseConfig::load()?),
    }
}

fn load_store(topics_path: Option<&str>) -> Result<KnowledgeStore> {
    match topics_path {
        Some(p) => Ok(KnowledgeStore::load_from(Path::new(&expand_path(p)))?),
        None => Ok(KnowledgeStore::builtin()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "knowbase=debug,knowbase_knowledge=debug,knowbase_gateway=debug,tower_http=debug"
    } else {
        "knowbase=info,knowbase_knowledge=info,knowbase_gateway=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(topics) = cli.topics {
        config.knowledge.topics_path = Some(topics);
    }
    let store = load_store(config.knowledge.topics_path.as_deref())?;
    tracing::debug!("Knowledge store: {} topic(s)", store.len());

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        static_dir: None,
    }) {
        Command::Serve {
            host,
            port,
            static_dir,
        } => {
            if let Some(host) = host {
                config.gateway.host = host;
            }
            if let Some(port) = port {
                config.gateway.port = port;
            }
            if let Some(dir) = static_dir {
                config.gateway.static_dir = Some(dir);
            }
            config.gateway.static_dir = config.gateway.static_dir.as_deref().map(expand_path);
            println!("📚 Knowbase v{}", env!("CARGO_PKG_VERSION"));
            println!("   🌐 Search page: http://{}", config.gateway.bind_addr());
            println!("   🔎 API:         POST /api/search");
            println!();
            knowbase_gateway::start(&config.gateway, store).await?;
        }
        Command::Search { query } => {
            let results = store.search(&query);
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Topics => {
            for topic in store.topics() {
                println!("{}: {}", topic.title, topic.keywords.join(", "));
            }
        }
    }

    Ok(())
}
