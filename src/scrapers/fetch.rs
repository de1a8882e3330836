use crate::error::{Result, ScrapeError};
use crate::scrapers::traits::PageFetcher;
use crate::scrapers::types::FetchSettings;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

/// reqwest-backed fetcher. Owns its client; the client pools connections
/// across the concurrent fetches of one run.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScrapeError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Downloading information for posting \"{}\"...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ScrapeError::network(url, e))?;

        let html = response
            .text()
            .await
            .map_err(|e| ScrapeError::network(url, e))?;

        debug!("Downloaded {} bytes of HTML from {}", html.len(), url);
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builds_with_default_settings() {
        assert!(HttpFetcher::new(&FetchSettings::default()).is_ok());
    }

    #[test]
    fn test_builds_with_timeout() {
        let settings = FetchSettings {
            timeout: Some(Duration::from_secs(5)),
        };
        assert!(HttpFetcher::new(&settings).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_error() {
        let fetcher = HttpFetcher::new(&FetchSettings::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        match err {
            ScrapeError::Network { url, .. } => assert_eq!(url, "not a url"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
