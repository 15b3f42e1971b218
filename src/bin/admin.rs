//! CLI administration tool for shortlink.
//!
//! Inspects links and rankings and deletes links without going through the
//! HTTP API. Uses the same services, so validation rules are identical.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Most visited links in the last day
//! cargo run --bin admin -- top --window 24h --limit 5
//!
//! # Delete a link and its access history
//! cargo run --bin admin -- delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use shortlink::application::services::{AnalyticsService, LinkService};
use shortlink::config::Config;
use shortlink::domain::repositories::{ClickRepository, LinkRepository};
use shortlink::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use shortlink::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all short links
    List,

    /// Show the most visited links
    Top {
        /// Trailing window such as 7d, 24h, 30m or 10s (all-time if omitted)
        #[arg(short, long)]
        window: Option<String>,

        /// Number of links to show
        #[arg(short, long)]
        limit: Option<i64>,
    },

    /// Delete a short link and its access history
    Delete {
        /// Link identity
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::List => list_links(link_service(&pool)).await?,
        Commands::Top { window, limit } => {
            let analytics = AnalyticsService::with_limits(
                Arc::new(PgClickRepository::new(Arc::new(pool.clone()))),
                config.analytics_default_limit,
                config.analytics_max_limit,
            );
            show_top(analytics, window, limit).await?
        }
        Commands::Delete { id, yes } => delete_link(link_service(&pool), id, yes).await?,
        Commands::Db { action } => match action {
            DbAction::Check => check_db(&pool).await?,
        },
    }

    Ok(())
}

fn link_service(pool: &PgPool) -> LinkService<PgLinkRepository> {
    LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
}

/// Prints every link with its counter. Links never visited are highlighted.
///
/// ```text
/// Short links
///
///   ID     Code         Clicks   Last access        URL
///   -----------------------------------------------------------------
///   1      AAAAAAAAAAE  12       2025-01-15 10:30   https://example.com/
/// ```
async fn list_links<L: LinkRepository>(service: LinkService<L>) -> Result<()> {
    println!("{}", "Short links".bright_blue().bold());
    println!();

    let links = service.list_links().await.context("Failed to list links")?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<12} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Last access".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for link in &links {
        let last_access = link
            .last_accessed_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        let clicks = link.click_count.to_string();
        let clicks = if link.is_unvisited() {
            clicks.yellow()
        } else {
            clicks.normal()
        };

        println!(
            "  {:<6} {:<12} {:<8} {:<18} {}",
            link.id.to_string().bright_black(),
            link.short_code.cyan(),
            clicks,
            last_access.bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

/// Prints a ranking, all-time or for a trailing window.
async fn show_top<C: ClickRepository>(
    service: AnalyticsService<C>,
    window: Option<String>,
    limit: Option<i64>,
) -> Result<()> {
    let title = match &window {
        Some(w) => format!("Top links (last {w})"),
        None => "Top links (all time)".to_string(),
    };
    println!("{}", title.bright_blue().bold());
    println!();

    let limit = limit.unwrap_or_else(|| service.default_limit());
    let ranking = service.top_by_window(window.as_deref(), limit).await?;

    if ranking.is_empty() {
        println!("{}", "  No visits recorded".yellow());
        return Ok(());
    }

    for (rank, top) in ranking.iter().enumerate() {
        println!(
            "  {:>3}. {:<12} {:>8}  {}",
            rank + 1,
            top.short_code.cyan(),
            top.click_count.to_string().bright_white().bold(),
            top.original_url
        );
    }

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link<L: LinkRepository>(
    service: LinkService<L>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    let link = service
        .get_link(id)
        .await?
        .with_context(|| format!("Link {id} not found"))?;

    println!("  Code:   {}", link.short_code.cyan());
    println!("  URL:    {}", link.original_url);
    println!("  Clicks: {}", link.click_count);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link and its access history?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    if service.delete_link(id).await? {
        println!("{}", "Link deleted".green().bold());
    } else {
        println!("{}", "Link was already deleted".yellow());
    }

    Ok(())
}

/// Runs a trivial query and reports the server version.
async fn check_db(pool: &PgPool) -> Result<()> {
    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await
        .context("Database query failed")?;

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await
        .context("short_links table is missing; start the server once to migrate")?;

    println!("{}", "Database connection OK".green().bold());
    println!("  {}", version.bright_black());
    println!("  Links: {}", links.to_string().bright_white().bold());

    Ok(())
}
