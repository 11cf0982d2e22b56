mod config;
mod error;
mod models;
mod output;
mod pipeline;
mod render;
mod scraper;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use config::{DEFAULT_BASE_URL, DEFAULT_NAV_SELECTOR, DEFAULT_OUTPUT_PATH, DEFAULT_USER_AGENT, ScrapeConfig};

#[derive(Parser)]
#[command(name = "wechat-api-docs")]
#[command(about = "Summarise the WeChat Mini Program server API reference as Markdown")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the documentation site and write the Markdown summary
    Scrape(ScrapeArgs),
    /// Re-render a saved JSON snapshot without fetching anything
    Render {
        #[arg(short, long)]
        snapshot: PathBuf,
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct ScrapeArgs {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// CSS selector for the navigation panel links
    #[arg(long, default_value = DEFAULT_NAV_SELECTOR)]
    nav_selector: String,
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// Also save the scraped records as JSON
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Per-request timeout in seconds (none by default)
    #[arg(long)]
    timeout: Option<u64>,
}

impl From<ScrapeArgs> for ScrapeConfig {
    fn from(args: ScrapeArgs) -> Self {
        Self {
            base_url: args.base_url,
            nav_selector: args.nav_selector,
            output: args.output,
            snapshot: args.snapshot,
            user_agent: args.user_agent,
            timeout: args.timeout.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let summary = match cli.command {
        Commands::Scrape(args) => pipeline::run_scrape(&ScrapeConfig::from(args)).await?,
        Commands::Render { snapshot, output } => pipeline::run_render(&snapshot, &output)?,
    };
    println!("Wrote {} endpoints to {}", summary.entries, summary.output.display());

    Ok(())
}
