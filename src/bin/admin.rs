//! CLI administration tool for cms-service.
//!
//! Slug tooling, cache maintenance and database checks without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Derive a slug (no database needed)
//! cargo run --bin cms-admin -- slug generate "Quarterly Update: March"
//!
//! # Check a slug against every rule
//! cargo run --bin cms-admin -- slug validate my--slug
//!
//! # Find a free slug for a blog post
//! cargo run --bin cms-admin -- slug unique blog_post "Quarterly Update"
//!
//! # Inspect or drop a cache entry
//! cargo run --bin cms-admin -- cache get projects:published
//! cargo run --bin cms-admin -- cache invalidate projects:published
//!
//! # Check database connection
//! cargo run --bin cms-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (`slug unique`, `db`)
//! - `REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/...: Redis connection (`cache`)

use cms_service::application::services::SlugService;
use cms_service::config::Config;
use cms_service::domain::entities::ContentKind;
use cms_service::infrastructure::cache::{CacheFacade, CacheTarget};
use cms_service::infrastructure::persistence::PgContentRepository;
use cms_service::utils::slug::{DEFAULT_MAX_ATTEMPTS, SlugOptions, generate_slug, validate_slug};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing cms-service.
#[derive(Parser)]
#[command(name = "cms-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Slug tooling
    Slug {
        #[command(subcommand)]
        action: SlugAction,
    },

    /// Cache maintenance
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Slug subcommands.
#[derive(Subcommand)]
enum SlugAction {
    /// Derive a slug from text
    Generate {
        text: String,

        #[arg(long, default_value_t = '-')]
        separator: char,

        #[arg(long, default_value_t = 60)]
        max_length: usize,

        #[arg(long)]
        preserve_case: bool,
    },

    /// Report every rule a slug breaks
    Validate { slug: String },

    /// Derive a slug that is free for a content kind
    Unique {
        /// blog_post, project or career
        kind: ContentKind,

        text: String,

        /// Row to ignore (the item being edited)
        #[arg(long)]
        exclude_id: Option<i64>,

        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },
}

/// Cache subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Print a cached entry
    Get { key: String },

    /// Remove a cached entry
    Invalidate {
        key: String,

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

    /// Show slug counts per content table
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Slug { action } => handle_slug_action(action).await?,
        Commands::Cache { action } => handle_cache_action(action).await?,
        Commands::Db { action } => handle_db_action(action).await?,
    }

    Ok(())
}

async fn connect_database() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Dispatches slug commands.
async fn handle_slug_action(action: SlugAction) -> Result<()> {
    match action {
        SlugAction::Generate {
            text,
            separator,
            max_length,
            preserve_case,
        } => {
            let options = SlugOptions {
                separator,
                max_length,
                preserve_case,
            };
            println!("{}", generate_slug(&text, &options).bright_green().bold());
        }
        SlugAction::Validate { slug } => {
            let result = validate_slug(&slug);

            if result.is_valid {
                println!("{} {}", "✅".green(), slug.cyan());
                return Ok(());
            }

            println!("{} {}", "❌".red(), slug.cyan());
            for violation in &result.errors {
                println!(
                    "  {:<20} {}",
                    violation.code().yellow(),
                    violation.to_string().bright_black()
                );
            }
            std::process::exit(1);
        }
        SlugAction::Unique {
            kind,
            text,
            exclude_id,
            max_attempts,
        } => {
            let pool = connect_database().await?;
            let service = SlugService::new(
                Arc::new(PgContentRepository::new(Arc::new(pool))),
                max_attempts,
            );

            let slug = service
                .suggest(kind, &text, exclude_id, &SlugOptions::default())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to resolve slug: {}", e))?;

            println!("{}", slug.bright_green().bold());
        }
    }

    Ok(())
}

/// Dispatches cache commands against the configured Redis.
async fn handle_cache_action(action: CacheAction) -> Result<()> {
    let redis_url = Config::load_redis_url().context("REDIS_URL or REDIS_HOST must be set")?;
    let cache = CacheFacade::new(CacheTarget::Redis(redis_url));

    match action {
        CacheAction::Get { key } => {
            match cache.get_cached::<serde_json::Value>(&key).await {
                Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                None => println!("{}", "  (miss)".yellow()),
            }
        }
        CacheAction::Invalidate { key, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Invalidate cache entry '{}'?", key))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            if cache.invalidate(&key).await {
                println!("{}", "✅ Cache entry invalidated".green().bold());
            } else {
                println!("{}", "⚠️  Cache unreachable, nothing invalidated".yellow());
            }
        }
    }

    cache.close().await;
    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    let pool = connect_database().await?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Content tables".bright_blue().bold());
            println!();

            for kind in ContentKind::ALL {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", kind.table()))
                    .fetch_one(&pool)
                    .await?;

                println!(
                    "  {:<12} {}",
                    kind.table(),
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}
