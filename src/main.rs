//! cars-scraper - Scrape a cars.com listing page into JSON and tab-separated files
//!
//! Runs once with no arguments: fetch, parse, extract, write.

use anyhow::Result;
use cars_scraper::commands::ScrapeCommand;
use cars_scraper::config::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cars-scraper",
    version,
    about = "Scrape a cars.com listing page into JSON and tab-separated files",
    long_about = "Fetches one cars.com search results page, extracts description, price, and link \
                  from every vehicle card, and writes them to cars.json and cars.csv."
)]
struct Cli {
    /// Listing page URL (defaults to the new Lexus IS 350 search)
    #[arg(long)]
    url: Option<String>,

    /// JSON output file
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Tab-separated output file
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long)]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(path) = cli.json_out {
        config.json_path = path;
    }
    if let Some(path) = cli.csv_out {
        config.csv_path = path;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    let summary = ScrapeCommand::new(config).execute().await?;

    let note = if summary.success { "" } else { " [non-success status]" };
    println!(
        "Scraped {} cars (status {}{}) -> {}, {}",
        summary.records,
        summary.status,
        note,
        summary.json_path.display(),
        summary.csv_path.display()
    );

    Ok(())
}
