//! CLI administration tool for hashlink.
//!
//! Runs the same services as the HTTP server directly against the configured
//! store, for operators who want to inspect or create mappings without going
//! through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (optionally claiming a code)
//! cargo run --bin admin -- shorten https://example.com/page
//! cargo run --bin admin -- shorten https://example.com/page --code promo
//!
//! # Show where a code points, without counting a click
//! cargo run --bin admin -- resolve NkHF8idM
//!
//! # Show click statistics
//! cargo run --bin admin -- stats NkHF8idM
//!
//! # Check store connectivity
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/`REDIS_PASSWORD`/`REDIS_DB`,
//! and `BASE_URL` for printing full short URLs. `STORE_BACKEND=memory` is
//! refused: each invocation would start from an empty store.

use hashlink::application::services::{LinkService, StatsService};
use hashlink::config::{self, Config, StoreBackend, mask_connection_string};
use hashlink::server::connect_store;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing hashlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short code for a URL
    Shorten {
        /// The long URL to shorten
        url: String,

        /// Custom short code to claim
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show the URL a code points to (does not count a click)
    Resolve {
        /// Short code
        code: String,
    },

    /// Show the URL and click count of a code
    Stats {
        /// Short code
        code: String,
    },

    /// Check store connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    ensure_persistent_store(&config)?;
    hashlink::logging::init("warn", &config.log_format);

    match cli.command {
        Commands::Shorten { url, code } => handle_shorten(&config, &url, code.as_deref()).await?,
        Commands::Resolve { code } => handle_resolve(&config, &code).await?,
        Commands::Stats { code } => handle_stats(&config, &code).await?,
        Commands::Ping => handle_ping(&config).await?,
    }

    Ok(())
}

/// The admin tool only makes sense against a store that outlives the process.
fn ensure_persistent_store(config: &Config) -> Result<()> {
    if config.store_backend == StoreBackend::Memory {
        bail!(
            "STORE_BACKEND=memory is not supported by admin: the in-memory store \
             is private to each process. Point admin at the server's Redis instead."
        );
    }
    Ok(())
}

async fn handle_shorten(config: &Config, url: &str, code: Option<&str>) -> Result<()> {
    let service = LinkService::new(connect_store(config).await?);

    let outcome = service.shorten(url, code).await?;

    if outcome.created {
        println!("{}", "✓ Short code created".green().bold());
    } else {
        println!("{}", "✓ URL was already shortened".yellow().bold());
    }
    println!("  {}: {}", "Code".bold(), outcome.link.code.cyan());
    println!("  {}: {}", "URL".bold(), outcome.link.long_url);
    if let Some(ref base_url) = config.base_url {
        println!(
            "  {}: {}",
            "Short URL".bold(),
            service.get_short_url(base_url, &outcome.link.code)
        );
    }

    Ok(())
}

async fn handle_resolve(config: &Config, code: &str) -> Result<()> {
    let service = LinkService::new(connect_store(config).await?);

    let link = service.get_link_by_code(code).await?;
    println!("{} → {}", link.code.cyan(), link.long_url);

    Ok(())
}

async fn handle_stats(config: &Config, code: &str) -> Result<()> {
    let service = StatsService::new(connect_store(config).await?);

    let stats = service.get_stats(code).await?;

    println!("\n{}", "📊 Link Statistics".bold());
    println!("{}", "─".repeat(40));
    println!("  {}: {}", "Code".bold(), stats.code.cyan());
    println!("  {}: {}", "URL".bold(), stats.long_url);
    println!(
        "  {}: {}",
        "Clicks".bold(),
        stats.clicks.to_string().green()
    );

    Ok(())
}

async fn handle_ping(config: &Config) -> Result<()> {
    println!(
        "{} {} store...",
        "Checking".bold(),
        config.store_backend.to_string().cyan()
    );

    let store = connect_store(config).await?;

    if !store.health_check().await {
        bail!(
            "Store at {} did not answer",
            mask_connection_string(&config.redis_url)
        );
    }

    println!("{}", "✓ Store connection OK".green().bold());
    Ok(())
}
