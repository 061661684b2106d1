//! CLI administration tool for link-shortener.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link that expires in one hour
//! cargo run --bin admin -- link create https://example.com --ttl 3600
//!
//! # Show statistics for a link
//! cargo run --bin admin -- link show aB3dE5f
//!
//! # Totals across all links
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use link_shortener::application::services::LinkService;
use link_shortener::config::{self, StorageBackend};
use link_shortener::domain::entities::LinkStats;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use link_shortener::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals across all links
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new short link
    Create {
        /// Target URL
        url: String,

        /// Lifetime in seconds (the link never expires if omitted)
        #[arg(long)]
        ttl: Option<i64>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics for a short link
    Show {
        /// Short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("The admin tool only works with STORAGE_BACKEND=postgres");
    }

    let pool = connect_pool(&config).await?;
    let service = LinkService::with_code_length(
        Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))),
        config.short_code_length,
    );

    match cli.command {
        Commands::Link { action } => match action {
            LinkAction::Create { url, ttl, yes } => create_link(&service, url, ttl, yes).await?,
            LinkAction::Show { code } => show_link(&service, &code).await?,
        },
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => match action {
            DbAction::Check => check_db(&pool).await?,
        },
    }

    Ok(())
}

/// Creates a short link after an optional confirmation.
async fn create_link(
    service: &LinkService<PgLinkRepository>,
    url: String,
    ttl: Option<i64>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create short link".bright_blue().bold());
    println!();
    println!("  Target: {}", url.cyan());
    match ttl {
        Some(seconds) => println!("  TTL:    {} seconds", seconds.to_string().cyan()),
        None => println!("  TTL:    {}", "never expires".cyan()),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create(&url, ttl)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Link created".green().bold());
    println!();
    println!("  Code:    {}", link.short_id.bright_yellow().bold());
    println!("  Target:  {}", link.target_url);
    println!("  Created: {}", link.created_at.to_rfc3339());
    println!(
        "  Expires: {}",
        link.expires_at
            .map(|e| e.to_rfc3339())
            .unwrap_or_else(|| "never".to_string())
    );
    println!();

    Ok(())
}

/// Prints the statistics view of one link.
async fn show_link(service: &LinkService<PgLinkRepository>, code: &str) -> Result<()> {
    let stats = service
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_stats(&stats);
    Ok(())
}

fn print_stats(stats: &LinkStats) {
    let state = if stats.expired {
        "EXPIRED".red()
    } else {
        "ACTIVE".green()
    };

    println!("{}", format!("Link {}", stats.short_id).bright_blue().bold());
    println!();
    println!("  Target:    {}", stats.target_url.cyan());
    println!("  Status:    {}", state);
    println!(
        "  Hits:      {}",
        stats.hit_count.to_string().bright_white().bold()
    );
    println!(
        "  Created:   {}",
        stats.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Expires:   {}",
        stats
            .expires_at
            .map(|e| e.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "never".to_string())
    );
    if let Some(remaining) = stats.ttl_seconds_remaining {
        println!("  Remaining: {}s", remaining);
    }
    println!();
}

/// Displays totals: links, expired links and hits.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let (links, expired, hits): (i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*),
            COUNT(*) FILTER (WHERE expires_at IS NOT NULL AND expires_at <= NOW()),
            COALESCE(SUM(hit_count), 0)::BIGINT
        FROM links
        "#,
    )
    .fetch_one(pool)
    .await
    .context("Failed to query statistics")?;

    println!("  Links:   {}", links.to_string().bright_white().bold());
    println!("  Expired: {}", expired.to_string().bright_black());
    println!("  Hits:    {}", hits.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Verifies the database answers a trivial query.
async fn check_db(pool: &PgPool) -> Result<()> {
    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await
        .context("Database query failed")?;

    println!("{}", "Database connection OK".green().bold());
    println!("  {}", version.bright_black());

    Ok(())
}
