pub mod airbnb;
pub mod fetch;
pub mod traits;
pub mod types;

pub use airbnb::ListingExtractor;
pub use fetch::HttpFetcher;
pub use traits::PageFetcher;
pub use types::{FetchSettings, ScrapeOptions};

use std::io::Write;

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::error::{Result, ScrapeError};
use crate::models::{Listing, OutputFormat};
use crate::output;

/// Download → extract → serialize, over a list of posting URLs.
pub struct AirbnbScraper<F> {
    fetcher: F,
    extractor: ListingExtractor,
}

impl AirbnbScraper<HttpFetcher> {
    /// Scraper backed by a fresh HTTP client
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        Self::with_fetcher(HttpFetcher::new(settings)?)
    }
}

impl<F: PageFetcher> AirbnbScraper<F> {
    pub fn with_fetcher(fetcher: F) -> Result<Self> {
        Ok(Self {
            fetcher,
            extractor: ListingExtractor::new()?,
        })
    }

    /// Fetch every posting concurrently and extract one listing per URL,
    /// in input order. The first failure fails the whole batch.
    pub async fn scrape(&self, urls: &[String]) -> Result<Vec<Listing>> {
        if urls.is_empty() {
            return Err(ScrapeError::config("no posting URLs supplied"));
        }

        info!("Fetching {} postings", urls.len());
        let pages = try_join_all(urls.iter().map(|url| self.fetcher.fetch(url))).await?;

        let listings = pages
            .iter()
            .map(|html| self.extractor.extract(html))
            .collect::<Result<Vec<_>>>()?;

        debug!("Extracted {} listings", listings.len());
        Ok(listings)
    }

    /// Scrape and then write the listings to `out`. Nothing is written
    /// unless every posting succeeded.
    pub async fn run<W: Write>(
        &self,
        urls: &[String],
        format: OutputFormat,
        out: W,
    ) -> Result<Vec<Listing>> {
        let listings = self.scrape(urls).await?;
        output::write_listings(out, &listings, format)?;
        Ok(listings)
    }
}

/// Entry point for the CLI: validates the inputs, scrapes over HTTP and
/// prints to stdout.
pub async fn run(urls: &[String], options: &ScrapeOptions) -> Result<Vec<Listing>> {
    if urls.is_empty() {
        return Err(ScrapeError::config("no posting URLs supplied"));
    }
    let format = OutputFormat::from_flags(options.csv, options.json)?;

    let scraper = AirbnbScraper::new(&options.fetch)?;
    let listings = scraper.scrape(urls).await?;
    output::print_listings(&listings, format)?;

    Ok(listings)
}
