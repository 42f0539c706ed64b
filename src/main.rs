//! foreman-content - Content store smoke tool
//!
//! Renders the same content the marketing site renders, from the same
//! retrieval layer: connected queries when a project is configured,
//! placeholder content otherwise. Useful for checking what a page will
//! show before the site deploys.

use anyhow::Result;
use clap::{Parser, Subcommand};
use foreman_content::{fallback, render, ContentClient, StoreConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "foreman-content")]
#[command(author = "Foreman Team")]
#[command(version)]
#[command(about = "Content retrieval layer for the Foreman marketing site")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FOREMAN_CONTENT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit raw JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all agents, newest first
    Agents,

    /// Show one agent by slug
    Agent { slug: String },

    /// List all connectors, alphabetical
    Connectors,

    /// Show one connector by slug
    Connector { slug: String },

    /// List all guides, most recent first
    Guides,

    /// Show one guide by slug
    Guide { slug: String },

    /// List all categories
    Categories,

    /// Show one standalone page by slug
    Page { slug: String },

    /// Fetch every overview listing concurrently
    Overview,

    /// Show store configuration state
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("foreman_content={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::from_env(),
    };
    let client = ContentClient::from_config(&config)?;

    match &cli.command {
        Commands::Agents => {
            let agents = fallback::agents(client.list_agents().await);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&agents)?);
            } else {
                for agent in &agents {
                    println!("{:<28} {}", agent.slug, agent.title);
                }
            }
        }
        Commands::Agent { slug } => {
            let agent = fallback::agent(client.get_agent_by_slug(slug).await, slug);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&agent)?);
            } else {
                println!("{} ({})", agent.title, agent.status.as_str());
                println!("{}", agent.description);
                if !agent.connectors.is_empty() {
                    let names: Vec<&str> =
                        agent.connectors.iter().map(|c| c.title.as_str()).collect();
                    println!("Works with: {}", names.join(", "));
                }
            }
        }
        Commands::Connectors => {
            let connectors = fallback::connectors(client.list_connectors().await);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&connectors)?);
            } else {
                for connector in &connectors {
                    println!("{:<28} {}", connector.slug, connector.title);
                }
            }
        }
        Commands::Connector { slug } => {
            let connector = fallback::connector(client.get_connector_by_slug(slug).await, slug);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&connector)?);
            } else {
                println!("{}", connector.title);
                println!("{}", connector.description);
                for (i, step) in connector.setup_steps.iter().enumerate() {
                    println!("  {}. {}", i + 1, step.title);
                }
            }
        }
        Commands::Guides => {
            let guides = fallback::guides(client.list_guides().await);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&guides)?);
            } else {
                for guide in &guides {
                    println!(
                        "{:<28} {} ({})",
                        guide.slug,
                        guide.title,
                        guide.published_at.format("%Y-%m-%d")
                    );
                }
            }
        }
        Commands::Guide { slug } => {
            let guide = fallback::guide(client.get_guide_by_slug(slug).await, slug);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&guide)?);
            } else {
                println!("{} by {}", guide.title, guide.author);
                println!("{}", guide.excerpt);
            }
        }
        Commands::Categories => {
            let categories = fallback::categories(client.list_categories().await);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                for category in &categories {
                    println!("{:<28} {}", category.slug, category.title);
                }
            }
        }
        Commands::Page { slug } => {
            let page = fallback::page(client.get_page_by_slug(slug).await, slug);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("{}", page.title);
            }
        }
        Commands::Overview => {
            let snapshot = render::snapshot(&client).await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!("{}", snapshot.to_text());
            }
        }
        Commands::Status => {
            if client.is_connected() {
                println!("store:   connected");
                println!("dataset: {}", config.dataset);
            } else {
                println!("store:   disconnected (placeholder content only)");
            }
        }
    }

    Ok(())
}
