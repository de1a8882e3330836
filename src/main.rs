use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use listing_scout::{FetchSettings, ScrapeOptions};
use tracing::{info, Level};

/// Scrape Airbnb postings and print them as CSV or JSON
#[derive(Parser, Debug)]
#[command(name = "listing-scout", version, about)]
struct Cli {
    /// Posting URLs to scrape
    urls: Vec<String>,

    /// Output a CSV table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output a JSON array
    #[arg(long)]
    json: bool,

    /// Log each download on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Request timeout in seconds (none by default)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl Cli {
    fn options(&self) -> ScrapeOptions {
        ScrapeOptions {
            csv: self.csv,
            json: self.json,
            fetch: FetchSettings {
                timeout: self.timeout.map(Duration::from_secs),
            },
        }
    }
}

/// Logs go to stderr so stdout only ever carries the scraped data.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn scrape(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options();
    let listings = listing_scout::run(&cli.urls, &options)
        .await
        .context("Failed to scrape postings")?;

    info!("Scraped {} postings", listings.len());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.urls.is_empty() {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    init_logging(cli.verbose);

    match scrape(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
