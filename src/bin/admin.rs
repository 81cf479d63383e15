//! CLI administration tool for the newsletter dashboard.
//!
//! Talks to the same REST backend as the web dashboard, for quick checks and
//! cleanups from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List newsletters (page 2)
//! cargo run --bin admin -- newsletters list --page 2
//!
//! # Delete a newsletter after confirmation
//! cargo run --bin admin -- newsletters delete 65f1c0ffee
//!
//! # List subscribers
//! cargo run --bin admin -- subscribers list
//!
//! # Show dashboard counts
//! cargo run --bin admin -- summary
//!
//! # Check that the backend answers
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` (required): base URL of the REST backend
//! - `API_TIMEOUT_SECS` (optional): request timeout, default 15
//! - `PAGE_SIZE` (optional): rows per page, default 10

use newsletter_dashboard::application::services::DashboardService;
use newsletter_dashboard::domain::repositories::{NewsletterRepository, SubscriberRepository};
use newsletter_dashboard::infrastructure::http::{
    ApiClient, HttpNewsletterRepository, HttpSubscriberRepository,
};
use newsletter_dashboard::web::views::{format_count, format_date};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for the newsletter dashboard.
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
    /// Manage newsletters
    Newsletters {
        #[command(subcommand)]
        action: NewsletterAction,
    },

    /// Browse subscribers
    Subscribers {
        #[command(subcommand)]
        action: SubscriberAction,
    },

    /// Show subscriber and newsletter counts
    Summary,

    /// Check that the backend is reachable
    Check,
}

#[derive(Subcommand)]
enum NewsletterAction {
    /// List one page of newsletters
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Delete a newsletter
    Delete {
        /// Newsletter id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SubscriberAction {
    /// List one page of subscribers
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
}

struct Backend {
    newsletters: Arc<HttpNewsletterRepository>,
    subscribers: Arc<HttpSubscriberRepository>,
    page_size: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let backend = connect()?;

    match cli.command {
        Commands::Newsletters { action } => handle_newsletter_action(action, &backend).await?,
        Commands::Subscribers { action } => handle_subscriber_action(action, &backend).await?,
        Commands::Summary => handle_summary(&backend).await,
        Commands::Check => handle_check(&backend).await?,
    }

    Ok(())
}

fn connect() -> Result<Backend> {
    let base_url = std::env::var("API_BASE_URL").context("API_BASE_URL must be set")?;
    let timeout = std::env::var("API_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(15);
    let page_size = std::env::var("PAGE_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|size| (1..=100).contains(size))
        .unwrap_or(10);

    let api = ApiClient::new(&base_url, Duration::from_secs(timeout))
        .map_err(|e| anyhow::anyhow!("Invalid API_BASE_URL: {}", e))?;
    let api = Arc::new(api);

    Ok(Backend {
        newsletters: Arc::new(HttpNewsletterRepository::new(api.clone())),
        subscribers: Arc::new(HttpSubscriberRepository::new(api)),
        page_size,
    })
}

/// Dispatches newsletter commands.
async fn handle_newsletter_action(action: NewsletterAction, backend: &Backend) -> Result<()> {
    match action {
        NewsletterAction::List { page } => list_newsletters(backend, page).await,
        NewsletterAction::Delete { id, yes } => delete_newsletter(backend, id, yes).await,
    }
}

async fn handle_subscriber_action(action: SubscriberAction, backend: &Backend) -> Result<()> {
    match action {
        SubscriberAction::List { page } => list_subscribers(backend, page).await,
    }
}

/// Lists one page of newsletters.
///
/// # Output Format
///
/// ```text
/// 📰 Newsletters (page 1 of 3)
///
///   ID                         Title                          Status     Created
///   ──────────────────────────────────────────────────────────────────────────────
///   65f1c0ffee                 Spring issue                   Sent       Mar 05, 2024
/// ```
async fn list_newsletters(backend: &Backend, page: u32) -> Result<()> {
    let page = page.max(1);
    let records = backend
        .newsletters
        .list(page, backend.page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list newsletters: {}", e))?;

    println!(
        "{}",
        format!("📰 Newsletters (page {} of {})", page, records.total_pages)
            .bright_blue()
            .bold()
    );
    println!();

    if records.items.is_empty() {
        println!("{}", "  No newsletters found".yellow());
        return Ok(());
    }

    println!(
        "  {:<26} {:<30} {:<10} {:<12}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Status".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for newsletter in &records.items {
        let status = match newsletter.status.badge() {
            "Sent" => newsletter.status.badge().green(),
            "Draft" => newsletter.status.badge().yellow(),
            other => other.normal(),
        };

        println!(
            "  {:<26} {:<30} {:<10} {}",
            newsletter.id.bright_black(),
            truncate(&newsletter.title, 30).cyan(),
            status,
            format_date(newsletter.created_at).bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        format_count(records.total_count()).bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a newsletter, asking for confirmation unless `--yes` is given.
async fn delete_newsletter(backend: &Backend, id: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Newsletter".bright_blue().bold());
    println!();

    let newsletter = backend
        .newsletters
        .get(&id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch newsletter: {}", e))?;

    println!("  Title: {}", newsletter.title.cyan());
    println!("  ID:    {}", newsletter.id.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this newsletter?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    backend
        .newsletters
        .remove(&id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete newsletter: {}", e))?;

    println!();
    println!("{}", "✅ Newsletter deleted".green().bold());
    println!();

    Ok(())
}

async fn list_subscribers(backend: &Backend, page: u32) -> Result<()> {
    let page = page.max(1);
    let records = backend
        .subscribers
        .list(page, backend.page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list subscribers: {}", e))?;

    println!(
        "{}",
        format!("👥 Subscribers (page {} of {})", page, records.total_pages)
            .bright_blue()
            .bold()
    );
    println!();

    if records.items.is_empty() {
        println!("{}", "  No subscribers found".yellow());
        return Ok(());
    }

    println!(
        "  {:<28} {:<34} {:<10}",
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for subscriber in &records.items {
        let status = if subscriber.is_active {
            "ACTIVE".green()
        } else {
            "INACTIVE".red()
        };

        println!(
            "  {:<28} {:<34} {}",
            truncate(&subscriber.full_name(), 28).cyan(),
            subscriber.email,
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        format_count(records.total_count()).bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays the same counts as the dashboard cards.
async fn handle_summary(backend: &Backend) {
    println!("{}", "📊 Summary".bright_blue().bold());
    println!();

    let service = DashboardService::new(
        backend.subscribers.clone(),
        backend.newsletters.clone(),
        backend.page_size,
    );
    let summary = service.summary().await;

    println!(
        "  Total Subscribers: {}",
        format_count(summary.total_subscribers).bright_white().bold()
    );
    println!(
        "  Newsletters:       {}",
        format_count(summary.total_newsletters).bright_white().bold()
    );

    if let Some(latest) = summary.recent_newsletters.first() {
        println!(
            "  Latest newsletter: {} ({})",
            latest.title.cyan(),
            format_date(latest.created_at).bright_black()
        );
    }
    println!();
}

/// Requests a single newsletter to confirm the backend answers.
async fn handle_check(backend: &Backend) -> Result<()> {
    println!("{}", "🔍 Checking backend...".bright_blue());

    match backend.newsletters.list(1, 1).await {
        Ok(_) => {
            println!("{}", "✅ Backend is reachable".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", "❌ Backend check failed".red().bold());
            Err(anyhow::anyhow!("{}", e))
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
