//! CLI administration tool for backend-microservices.
//!
//! Provides database checks, statistics and direct access to the URL
//! shortener without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Shorten a URL
//! cargo run --bin admin -- link shorten https://example.com
//!
//! # Look up a short code
//! cargo run --bin admin -- link resolve 1
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//!
//! Migrations are applied before any command runs.

use backend_microservices::config::Config;
use backend_microservices::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;

/// CLI tool for managing backend-microservices.
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
    /// Short link operations
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL (returns the existing code if already shortened)
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Resolve a short code to its URL
    Resolve {
        /// Numeric short code
        code: String,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL (or DB_USER, DB_PASSWORD and DB_NAME) must be set")?;

    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches short link commands through the same service the API uses.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let state = AppState::postgres(pool.clone(), false);

    match action {
        LinkAction::Shorten { url } => {
            println!("{}", "🔗 Shorten URL".bright_blue().bold());
            println!();

            let code = state
                .short_url_service
                .shorten(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to shorten '{}': {}", url, e))?;

            println!("  URL:  {}", url.cyan());
            println!("  Code: {}", code.to_string().bright_yellow().bold());
            println!();
            println!(
                "  Resolve with: {} /api/shorturl/{}",
                "GET".bright_cyan(),
                code
            );
            println!();
        }
        LinkAction::Resolve { code } => {
            println!("{}", "🔍 Resolve Short Code".bright_blue().bold());
            println!();

            match state.short_url_service.resolve(&code).await {
                Ok(url) => {
                    println!("  Code: {}", code.bright_yellow());
                    println!("  URL:  {}", url.cyan());
                }
                Err(e) => {
                    println!("{}", format!("❌ {}", e).red());
                }
            }
            println!();
        }
    }

    Ok(())
}

/// Displays row counts for every service.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let state = AppState::postgres(pool.clone(), false);

    let links_count = state
        .short_url_service
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let (users_count, exercises_count) = state
        .exercise_service
        .counts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;

    let last_code: Option<i64> =
        sqlx::query_scalar("SELECT seq_value FROM counters WHERE id = 'domain'")
            .fetch_optional(pool)
            .await?;

    println!(
        "  Short links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Last code:     {}",
        last_code
            .map_or_else(|| "-".to_string(), |c| c.to_string())
            .bright_green()
            .bold()
    );
    println!(
        "  Users:         {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Exercises:     {}",
        exercises_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
