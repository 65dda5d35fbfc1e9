//! CLI administration tool for login-portal.
//!
//! Provides commands for seeding per-account usage counters and inspecting
//! active sessions directly against Redis, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show one account's remaining call count
//! cargo run --bin admin -- usage get carid1
//!
//! # Seed an account's remaining call count
//! cargo run --bin admin -- usage set carid1 500
//!
//! # Show counts for every configured account
//! cargo run --bin admin -- usage list
//!
//! # List active sessions
//! cargo run --bin admin -- session list
//!
//! # Count active sessions
//! cargo run --bin admin -- session count
//!
//! # Check Redis connection
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` (required): Redis connection string
//! - `CARIDS` (required for `usage list`): comma-separated account ids
//!
//! # Features
//!
//! - **Usage Management**: Inspect and seed per-account call counters
//! - **Session Inspection**: List and count live sessions with expiry
//! - **Interactive Prompts**: Confirmation dialogs before writes
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use login_portal::domain::entities::SessionData;
use login_portal::infrastructure::session::SESSION_KEY_PREFIX;
use login_portal::infrastructure::usage::USAGE_KEY_PREFIX;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

/// CLI tool for managing login-portal.
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
    /// Manage per-account usage counters
    Usage {
        #[command(subcommand)]
        action: UsageAction,
    },

    /// Inspect login sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Check Redis connection
    Check,
}

/// Usage counter subcommands.
#[derive(Subcommand)]
enum UsageAction {
    /// Show one account's remaining call count
    Get {
        /// Account id (e.g. "carid1")
        carid: String,
    },

    /// Seed an account's remaining call count
    Set {
        /// Account id (e.g. "carid1")
        carid: String,

        /// New remaining call count
        count: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show counts for every account in CARIDS
    List,
}

/// Session inspection subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// List active sessions with expiry
    List,

    /// Count active sessions
    Count,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to Redis
    let redis_url = std::env::var("REDIS_URL").context("REDIS_URL must be set")?;

    let client = redis::Client::open(redis_url).context("Invalid REDIS_URL")?;
    let mut conn = ConnectionManager::new(client)
        .await
        .context("Failed to connect to Redis")?;

    match cli.command {
        Commands::Usage { action } => handle_usage_action(action, &mut conn).await?,
        Commands::Session { action } => handle_session_action(action, &mut conn).await?,
        Commands::Check => handle_check(&mut conn).await?,
    }

    Ok(())
}

/// Dispatches usage counter commands.
async fn handle_usage_action(action: UsageAction, conn: &mut ConnectionManager) -> Result<()> {
    match action {
        UsageAction::Get { carid } => {
            get_usage(conn, &carid).await?;
        }
        UsageAction::Set { carid, count, yes } => {
            set_usage(conn, &carid, count, yes).await?;
        }
        UsageAction::List => {
            list_usage(conn).await?;
        }
    }

    Ok(())
}

/// Shows one account's remaining call count.
async fn get_usage(conn: &mut ConnectionManager, carid: &str) -> Result<()> {
    println!("{}", "📊 Account Usage".bright_blue().bold());
    println!();

    let key = format!("{USAGE_KEY_PREFIX}{carid}");
    let count: Option<i64> = conn.get(&key).await.context("Failed to read counter")?;

    match count {
        Some(count) => {
            println!(
                "  {}: {}",
                carid.cyan(),
                count.to_string().bright_green().bold()
            );
        }
        None => {
            println!("  {}: {}", carid.cyan(), "not seeded (reads as 0)".yellow());
        }
    }
    println!();

    Ok(())
}

/// Seeds an account's remaining call count with a confirmation prompt.
///
/// # Effect
///
/// The selector prefers the account with the largest count, so seeding one
/// account above the others routes all page logins to it.
async fn set_usage(
    conn: &mut ConnectionManager,
    carid: &str,
    count: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✨ Seed Account Usage".bright_blue().bold());
    println!();
    println!("  Account: {}", carid.cyan());
    println!("  Count:   {}", count.to_string().bright_yellow().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Write this counter?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let key = format!("{USAGE_KEY_PREFIX}{carid}");
    conn.set::<_, _, ()>(&key, count)
        .await
        .context("Failed to write counter")?;

    println!();
    println!("{}", "✅ Counter updated!".green().bold());
    println!();

    Ok(())
}

/// Shows counts for every account configured in `CARIDS`.
///
/// # Output Format
///
/// ```text
/// 📊 Account Usage
///
///   Account              Remaining
///   ──────────────────────────────
///   carid1               500
///   carid2               not seeded
/// ```
async fn list_usage(conn: &mut ConnectionManager) -> Result<()> {
    println!("{}", "📊 Account Usage".bright_blue().bold());
    println!();

    let carids = std::env::var("CARIDS").context("CARIDS must be set")?;
    let carids: Vec<&str> = carids
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    if carids.is_empty() {
        println!("{}", "  No accounts configured".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<10}",
        "Account".bright_white().bold(),
        "Remaining".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for carid in &carids {
        let key = format!("{USAGE_KEY_PREFIX}{carid}");
        let count: Option<i64> = conn.get(&key).await.context("Failed to read counter")?;

        match count {
            Some(count) => {
                println!("  {:<20} {}", carid.cyan(), count.to_string().bright_green());
            }
            None => {
                println!("  {:<20} {}", carid.cyan(), "not seeded".yellow());
            }
        }
    }

    println!();
    println!(
        "  Total: {}",
        carids.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Dispatches session inspection commands.
async fn handle_session_action(action: SessionAction, conn: &mut ConnectionManager) -> Result<()> {
    match action {
        SessionAction::List => {
            list_sessions(conn).await?;
        }
        SessionAction::Count => {
            count_sessions(conn).await?;
        }
    }

    Ok(())
}

/// Lists active sessions with the assigned account and remaining lifetime.
///
/// Session ids are truncated and user tokens are never printed.
///
/// # Output Format
///
/// ```text
/// 📋 Active Sessions
///
///   Session       Account       Created              Expires in
///   ────────────────────────────────────────────────────────────
///   fMe2TKrc…     carid2        2024-01-15 10:30     4d 23h
/// ```
async fn list_sessions(conn: &mut ConnectionManager) -> Result<()> {
    println!("{}", "📋 Active Sessions".bright_blue().bold());
    println!();

    let keys = session_keys(conn).await?;

    if keys.is_empty() {
        println!("{}", "  No active sessions".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<13} {:<13} {:<20} {:<10}",
        "Session".bright_white().bold(),
        "Account".bright_white().bold(),
        "Created".bright_white().bold(),
        "Expires in".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for key in &keys {
        let record: Option<String> = conn.get(key).await.context("Failed to read session")?;
        let ttl: i64 = conn.ttl(key).await.context("Failed to read TTL")?;

        let Some(record) = record else {
            // Expired between KEYS and GET.
            continue;
        };

        let short_id = key
            .strip_prefix(SESSION_KEY_PREFIX)
            .unwrap_or(key)
            .chars()
            .take(8)
            .collect::<String>();

        match serde_json::from_str::<SessionData>(&record) {
            Ok(data) => {
                println!(
                    "  {:<13} {:<13} {:<20} {}",
                    format!("{short_id}…").bright_black(),
                    data.carid.cyan(),
                    data.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    format_ttl(ttl).bright_green()
                );
            }
            Err(_) => {
                println!(
                    "  {:<13} {}",
                    format!("{short_id}…").bright_black(),
                    "unreadable record".red()
                );
            }
        }
    }

    println!();
    println!("  Total: {}", keys.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Counts active sessions.
async fn count_sessions(conn: &mut ConnectionManager) -> Result<()> {
    println!("{}", "📋 Active Sessions".bright_blue().bold());
    println!();

    let keys = session_keys(conn).await?;

    println!(
        "  Sessions: {}",
        keys.len().to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Fetches all session keys.
///
/// Uses KEYS rather than SCAN; the session keyspace is small and this is
/// an operator tool, not a request path.
async fn session_keys(conn: &mut ConnectionManager) -> Result<Vec<String>> {
    let pattern = format!("{SESSION_KEY_PREFIX}*");
    conn.keys(pattern).await.context("Failed to list sessions")
}

/// Checks Redis connectivity via PING.
async fn handle_check(conn: &mut ConnectionManager) -> Result<()> {
    println!("{}", "🔍 Checking Redis connection...".bright_blue());

    redis::cmd("PING")
        .query_async::<()>(conn)
        .await
        .context("Redis PING failed")?;

    println!("{}", "✅ Redis connection OK".green().bold());

    Ok(())
}

/// Formats a TTL in seconds as days and hours.
fn format_ttl(ttl: i64) -> String {
    if ttl < 0 {
        return "unknown".to_string();
    }

    let days = ttl / 86_400;
    let hours = (ttl % 86_400) / 3_600;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        let minutes = (ttl % 3_600) / 60;
        format!("{hours}h {minutes}m")
    } else {
        format!("{}m", ttl / 60)
    }
}
