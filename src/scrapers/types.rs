use std::time::Duration;

/// HTTP settings for the posting fetcher
#[derive(Debug, Clone, Default)]
pub struct FetchSettings {
    /// Overall request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

/// Everything the CLI hands to the pipeline
#[derive(Debug, Clone, Default)]
pub struct ScrapeOptions {
    /// Emit a CSV table
    pub csv: bool,
    /// Emit a JSON array
    pub json: bool,
    pub fetch: FetchSettings,
}
