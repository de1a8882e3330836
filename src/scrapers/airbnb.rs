use crate::error::{Result, ScrapeError};
use crate::models::Listing;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Origin prefixed to the host profile path
pub const HOST: &str = "https://airbnb.com";

const TITLE: &str = "#listing_name";
const DAILY_PRICE: &str = "#dayly_price_string";
const PRICE_AMOUNT: &str = "#price_amount";
const HOST_PROFILE_IMG: &str = "#host-profile a > img";
const DETAIL_ROWS: &str = "#details-column .row > .col-9 > .row > .col-6 > div";

/// Reads the listing fields out of an Airbnb room page.
///
/// Selectors and the price pattern are compiled once on construction;
/// `extract` itself holds no state between pages.
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    title: Selector,
    daily_price: Selector,
    price_amount: Selector,
    host_profile_img: Selector,
    detail_rows: Selector,
    price: Regex,
}

impl ListingExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: parse_selector(TITLE)?,
            daily_price: parse_selector(DAILY_PRICE)?,
            price_amount: parse_selector(PRICE_AMOUNT)?,
            host_profile_img: parse_selector(HOST_PROFILE_IMG)?,
            detail_rows: parse_selector(DETAIL_ROWS)?,
            price: Regex::new(r"\$(.+)")?,
        })
    }

    /// Turn one downloaded page into a listing.
    ///
    /// Fixed fields go in first (`title`, `price_per_night`,
    /// `host_profile_url`), detail rows after. A detail row whose key
    /// collides with a fixed field overwrites its value in place.
    pub fn extract(&self, html: &str) -> Result<Listing> {
        if html.trim().is_empty() {
            return Err(ScrapeError::parse("document body is empty"));
        }
        let document = Html::parse_document(html);

        let mut listing = Listing::new();
        listing.insert("title", Some(select_text(&document, &self.title).trim().to_string()));
        listing.insert("price_per_night", self.price(&document));
        listing.insert("host_profile_url", Some(self.host_url(&document)?));

        for (key, value) in self.details(&document) {
            listing.insert(key, value);
        }

        debug!("Extracted {} fields", listing.len());
        Ok(listing)
    }

    /// Daily price, falling back to the price amount when the former is empty.
    /// Everything after the first `$` on its line; `None` when there is no `$`.
    fn price(&self, document: &Html) -> Option<String> {
        let mut text = select_text(document, &self.daily_price);
        if text.is_empty() {
            text = select_text(document, &self.price_amount);
        }

        self.price
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn host_url(&self, document: &Html) -> Result<String> {
        let img = document
            .select(&self.host_profile_img)
            .next()
            .ok_or_else(|| ScrapeError::extraction("host profile image not found"))?;

        let href = img
            .parent()
            .and_then(ElementRef::wrap)
            .and_then(|anchor| anchor.value().attr("href"))
            .ok_or_else(|| ScrapeError::extraction("host profile link has no href"))?;

        Ok(format!("{HOST}{href}"))
    }

    fn details(&self, document: &Html) -> Vec<(String, Option<String>)> {
        document
            .select(&self.detail_rows)
            .map(|el| el.text().collect::<String>())
            .filter_map(|text| {
                let text = text.trim();
                (!text.is_empty()).then(|| parse_detail(text))
            })
            .collect()
    }
}

/// Split a `Label: value` row on its first colon.
///
/// A row without a colon still yields a key, built from the whole text,
/// and an absent value.
pub fn parse_detail(text: &str) -> (String, Option<String>) {
    match text.split_once(':') {
        Some((label, value)) => (normalize_key(label), Some(value.trim().to_string())),
        None => {
            warn!("Detail row without a label separator: {:?}", text);
            (normalize_key(text), None)
        }
    }
}

/// `" Max Guests "` -> `"max_guests"`
pub fn normalize_key(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

fn select_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .flat_map(|el| el.text())
        .collect()
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| ScrapeError::selector(s, format!("{e:?}")))
}
