//! Airbnb listing scraper: download posting pages, pull out a few fields,
//! print them as CSV or JSON.

pub mod error;
pub mod models;
pub mod output;
pub mod scrapers;

pub use error::{Result, ScrapeError};
pub use models::{Listing, OutputFormat};
pub use scrapers::{run, AirbnbScraper, FetchSettings, HttpFetcher, PageFetcher, ScrapeOptions};
