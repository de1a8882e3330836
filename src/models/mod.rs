use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, ScrapeError};

/// Output format for the collected listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Resolve the format from the `--csv` / `--json` flags.
    /// Exactly one of them must be set.
    pub fn from_flags(csv: bool, json: bool) -> Result<Self> {
        match (csv, json) {
            (true, false) => Ok(Self::Csv),
            (false, true) => Ok(Self::Json),
            (false, false) => Err(ScrapeError::config("no output format specified")),
            (true, true) => Err(ScrapeError::config(
                "--csv and --json cannot be used together",
            )),
        }
    }
}

/// One scraped posting: a flat, insertion-ordered mapping from field name
/// to value. A `None` value is a field the page named but did not fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    fields: Vec<(String, Option<String>)>,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Value of a field; `None` both for unknown keys and absent values.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for Listing {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut listing = Listing::new();
        for (key, value) in iter {
            listing.insert(key, value);
        }
        listing
    }
}

// Hand-written so the JSON object keeps field order.
impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
