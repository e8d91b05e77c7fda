//! crudapp client - terminal UI and one-shot commands for the item API

mod api;
mod config;
mod tui;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use api::ItemsClient;
use config::Config;

#[derive(Parser)]
#[command(name = "crudapp")]
#[command(about = "crudapp - manage named items", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal UI (default)
    Ui,

    /// List all items
    List,

    /// Add an item
    Add {
        /// Item name (will prompt if not provided)
        name: Option<String>,
    },

    /// Rename an item
    Update {
        /// Item ID
        id: String,
        /// New name (will prompt if not provided)
        name: Option<String>,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Check a server and store its URL
    Connect {
        /// Base URL, e.g. http://localhost:8000
        url: String,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Ui);

    if matches!(command, Commands::Ui) {
        init_file_tracing()?;
    } else {
        init_tracing();
    }

    match command {
        Commands::Ui => cmd_ui().await,
        Commands::List => cmd_list().await,
        Commands::Add { name } => cmd_add(name).await,
        Commands::Update { id, name } => cmd_update(id, name).await,
        Commands::Delete { id, yes } => cmd_delete(id, yes).await,
        Commands::Connect { url } => cmd_connect(url).await,
        Commands::Config => cmd_config(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crudapp=info"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The terminal UI owns stdout/stderr, so logs go to a file instead
fn init_file_tracing() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {:?}", dir))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}

fn client() -> Result<ItemsClient> {
    let config = Config::load()?;
    Ok(ItemsClient::new(&config.effective_base_url()))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_ui() -> Result<()> {
    let client = client()?;
    tracing::info!("Starting terminal UI against {}", client.base_url());
    tui::run(client).await
}

async fn cmd_list() -> Result<()> {
    let client = client()?;
    let items = client.list_items().await?;

    if items.is_empty() {
        println!("No items found.");
        return Ok(());
    }

    println!("{}", "Items:".bold());
    for item in items {
        println!("  {} {}", item.id.dimmed(), item.name.cyan());
    }

    Ok(())
}

async fn cmd_add(name: Option<String>) -> Result<()> {
    let client = client()?;

    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("Item name")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?,
    };

    let item = client.create_item(&name).await?;
    println!("{} Added {} ({})", "✓".green(), item.name.cyan(), item.id.dimmed());

    Ok(())
}

async fn cmd_update(id: String, name: Option<String>) -> Result<()> {
    let client = client()?;

    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("New name")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?,
    };

    let item = client.update_item(&id, &name).await?;
    println!("{} Updated {} ({})", "✓".green(), item.name.cyan(), item.id.dimmed());

    Ok(())
}

async fn cmd_delete(id: String, yes: bool) -> Result<()> {
    let client = client()?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete item {}?", id))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = client.delete_item(&id).await?;
    println!("{} {}", "✓".green(), deleted.message);

    Ok(())
}

async fn cmd_connect(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(&url);

    // Test connection
    let client = ItemsClient::new(&config.base_url);
    print!("Testing connection... ");
    io::stdout().flush()?;

    match client.health().await {
        Ok(()) => {
            println!("{}", "OK".green());
        }
        Err(e) => {
            println!("{}", "Failed".red());
            bail!("Could not reach crudapp API at {}: {:#}", config.base_url, e);
        }
    }

    config.save()?;
    println!("{} Base URL saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    let effective = config.effective_base_url();

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    if effective != config.base_url {
        println!("  Override: {} (CRUDAPP_BASE_URL)", effective.yellow());
    }
    println!("  Log file: {:?}", Config::log_path()?);

    Ok(())
}
