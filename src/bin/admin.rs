//! CLI administration tool for shorturls.
//!
//! Provides commands for inspecting and removing short URLs, viewing
//! statistics, and performing database checks without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # View totals
//! cargo run --bin admin -- stats
//!
//! # Show a short URL with its clicks
//! cargo run --bin admin -- link show abc123
//!
//! # Delete a short URL and its clicks
//! cargo run --bin admin -- link delete abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database (default: `sqlite://shorturls.sqlite?mode=rwc`)

use shorturls::application::services::StatsService;
use shorturls::domain::repositories::ShortUrlRepository;
use shorturls::infrastructure::persistence::{SqliteClickRepository, SqliteShortUrlRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

const DEFAULT_DATABASE_URL: &str = "sqlite://shorturls.sqlite?mode=rwc";

/// CLI tool for managing shorturls.
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
    /// Show statistics
    Stats,

    /// Inspect or delete short URLs
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show a short URL and its clicks
    Show {
        /// Shortcode (case-sensitive)
        shortcode: String,
    },

    /// Delete a short URL together with its clicks
    Delete {
        /// Shortcode (case-sensitive)
        shortcode: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = SqlitePool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let pool = Arc::new(pool);

    match cli.command {
        Commands::Stats => handle_stats(pool).await?,
        Commands::Link { action } => handle_link_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays system totals.
async fn handle_stats(pool: Arc<SqlitePool>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stats = StatsService::new(
        Arc::new(SqliteShortUrlRepository::new(pool.clone())),
        Arc::new(SqliteClickRepository::new(pool)),
    );

    let short_url_count = stats
        .count_short_urls()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
    let click_count = stats
        .count_clicks()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Short URLs: {}",
        short_url_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:     {}",
        click_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Dispatches short URL commands.
async fn handle_link_action(action: LinkAction, pool: Arc<SqlitePool>) -> Result<()> {
    let repo = SqliteShortUrlRepository::new(pool);

    match action {
        LinkAction::Show { shortcode } => show_link(&repo, &shortcode).await?,
        LinkAction::Delete { shortcode, yes } => delete_link(&repo, &shortcode, yes).await?,
    }

    Ok(())
}

async fn show_link(repo: &SqliteShortUrlRepository, shortcode: &str) -> Result<()> {
    let stats = repo
        .find_with_clicks(shortcode)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Short URL not found")?;

    let short_url = &stats.short_url;

    println!("{}", "🔗 Short URL".bright_blue().bold());
    println!();
    println!("  Shortcode: {}", short_url.shortcode.cyan());
    println!("  Target:    {}", short_url.original_url);
    println!("  Created:   {}", short_url.created_at.to_rfc3339());
    println!("  Expires:   {}", short_url.expires_at.to_rfc3339());

    if short_url.is_expired() {
        println!("  Status:    {}", "expired".red());
    } else {
        println!("  Status:    {}", "active".green());
    }

    println!(
        "  Clicks:    {}",
        stats.total_clicks().to_string().bright_green().bold()
    );

    if !stats.clicks.is_empty() {
        println!();
        for click in &stats.clicks {
            println!(
                "  {}  {:<4} {}",
                click.timestamp.to_rfc3339().bright_black(),
                or_dash(&click.geo),
                or_dash(&click.referrer)
            );
        }
    }
    println!();

    Ok(())
}

/// Deletes a short URL after confirmation.
///
/// Clicks are removed by the cascading foreign key. The shortcode becomes
/// available again.
async fn delete_link(
    repo: &SqliteShortUrlRepository,
    shortcode: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Short URL".bright_blue().bold());
    println!();

    let short_url = repo
        .find_by_shortcode(shortcode)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Short URL not found")?;

    println!("  Shortcode: {}", short_url.shortcode.cyan());
    println!("  Target:    {}", short_url.original_url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL and all its clicks?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete(shortcode)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete short URL: {}", e))?;

    println!();
    if deleted {
        println!("{}", "✅ Short URL deleted".green().bold());
    } else {
        println!("{}", "⚠️  Short URL was already gone".yellow());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:     {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
