use crate::error::Result;
use async_trait::async_trait;

/// Downloads a posting page and hands back its body as text.
/// The scraper takes one of these by injection, so tests can swap the network out.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` with a single GET. Transport failures and non-2xx
    /// statuses are errors; nothing is retried.
    async fn fetch(&self, url: &str) -> Result<String>;
}
