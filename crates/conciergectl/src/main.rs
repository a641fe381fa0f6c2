//! Concierge Control - CLI client for the concierge matching engine.
//!
//! Drives a conversation against a venue directory from the terminal.

mod demo;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use concierge_common::{builtin_catalog, ConciergeConfig, VenueRecord};
use concierge_engine::{recommend_for_text, ConciergePipeline, Conversation};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conciergectl")]
#[command(about = "Restaurant concierge - hybrid venue matching", long_about = None)]
#[command(version)]
struct Cli {
    /// Venue directory JSON file (defaults to the bundled demo directory)
    #[arg(long, global = true)]
    venues: Option<PathBuf>,

    /// Engine config TOML (mode, remote URL)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive conversation with the concierge
    Chat,

    /// List the curated discovery prompts
    Prompts,

    /// One-shot recommendation for a free-form request
    Match {
        /// The request text, e.g. "romantic rooftop near the boulevard"
        text: Vec<String>,

        /// Shortlist size
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let pool = load_venues(cli.venues.as_deref())?;

    match cli.command {
        Commands::Chat => chat(&config, &pool).await,
        Commands::Prompts => {
            list_prompts();
            Ok(())
        }
        Commands::Match { text, limit } => {
            one_shot(&pool, &text.join(" "), limit);
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ConciergeConfig> {
    match path {
        Some(path) => ConciergeConfig::load(path),
        None => Ok(ConciergeConfig::default()),
    }
}

fn load_venues(path: Option<&std::path::Path>) -> Result<Vec<VenueRecord>> {
    let Some(path) = path else {
        return Ok(demo::demo_directory());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read venue directory {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse venue directory {}", path.display()))
}

async fn chat(config: &ConciergeConfig, pool: &[VenueRecord]) -> Result<()> {
    let mut conversation = Conversation::new(ConciergePipeline::new(config));
    println!(
        "{} ({} venues, {:?} mode). Empty line to quit.",
        "Concierge ready".green().bold(),
        pool.len(),
        config.mode
    );

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "you>".cyan());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            break;
        }

        if let Some(reply) = conversation.ask(pool, text).await {
            println!("{} {}", "concierge>".magenta(), reply.text);
            for venue in &reply.suggestions {
                println!(
                    "  {} {} {}",
                    "-".dimmed(),
                    venue.name.bold(),
                    format_details(venue).dimmed()
                );
            }
        }
    }

    Ok(())
}

fn list_prompts() {
    for prompt in builtin_catalog() {
        println!("{}  {}", prompt.title.bold(), prompt.subtitle.dimmed());
    }
}

fn one_shot(pool: &[VenueRecord], text: &str, limit: usize) {
    let result = recommend_for_text(pool, text, limit);
    if result.needs_more_info {
        println!("{}", "Need more detail to match anything.".yellow());
        return;
    }
    if result.relaxed {
        println!("{}", "(some constraints were relaxed)".yellow());
    }
    for venue in &result.items {
        println!("{} {}", venue.name.bold(), format_details(venue).dimmed());
    }
}

fn format_details(venue: &VenueRecord) -> String {
    let mut details = Vec::new();
    if !venue.neighborhood.is_empty() {
        details.push(venue.neighborhood.clone());
    }
    if let Some(label) = &venue.price_label {
        details.push(label.clone());
    }
    if let Some(rating) = venue.rating {
        details.push(format!("{rating:.1}*"));
    }
    format!("({})", details.join(", "))
}
