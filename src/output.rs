// src/output.rs

//! Renders the collected listings as JSON or CSV.

use std::io::{self, Write};

use crate::error::Result;
use crate::models::{Listing, OutputFormat};

/// Write every listing to stdout in the given format.
pub fn print_listings(listings: &[Listing], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listings(&mut out, listings, format)?;
    out.flush()?;
    Ok(())
}

/// Write every listing to `out` in the given format.
pub fn write_listings<W: Write>(out: W, listings: &[Listing], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, listings),
        OutputFormat::Csv => write_csv(out, listings),
    }
}

fn write_json<W: Write>(mut out: W, listings: &[Listing]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, listings)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: W, listings: &[Listing]) -> Result<()> {
    if listings.is_empty() {
        return Ok(());
    }

    let columns = columns(listings);
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&columns)?;

    for listing in listings {
        writer.write_record(columns.iter().map(|key| listing.get(key).unwrap_or("")))?;
    }

    writer.flush()?;
    Ok(())
}

/// Union of keys over all listings, in the order they are first seen.
pub fn columns(listings: &[Listing]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for key in listings.iter().flat_map(|listing| listing.keys()) {
        if !columns.contains(&key) {
            columns.push(key);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing(fields: &[(&str, Option<&str>)]) -> Listing {
        fields
            .iter()
            .map(|(k, v)| (*k, v.map(str::to_string)))
            .collect()
    }

    fn render(listings: &[Listing], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_listings(&mut buf, listings, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_json_is_pretty_array_in_order() {
        let listings = vec![listing(&[("a", Some("1"))]), listing(&[("b", Some("2"))])];
        let expected = "[\n  {\n    \"a\": \"1\"\n  },\n  {\n    \"b\": \"2\"\n  }\n]\n";
        assert_eq!(render(&listings, OutputFormat::Json), expected);
    }

    #[test]
    fn test_json_absent_value_is_null() {
        let listings = vec![listing(&[("price_per_night", None)])];
        let value: serde_json::Value =
            serde_json::from_str(&render(&listings, OutputFormat::Json)).unwrap();
        assert_eq!(value, serde_json::json!([{ "price_per_night": null }]));
    }

    #[test]
    fn test_csv_header_is_union_of_keys() {
        let listings = vec![listing(&[("a", Some("1"))]), listing(&[("b", Some("2"))])];
        assert_eq!(render(&listings, OutputFormat::Csv), "a,b\n1,\n,2\n");
    }

    #[test]
    fn test_csv_columns_follow_first_seen_order() {
        let listings = vec![
            listing(&[("title", Some("x")), ("bedrooms", Some("2"))]),
            listing(&[("beds", Some("3")), ("title", Some("y")), ("guests", Some("4"))]),
        ];
        assert_eq!(columns(&listings), vec!["title", "bedrooms", "beds", "guests"]);
    }

    #[test]
    fn test_csv_quotes_special_values() {
        let listings = vec![listing(&[
            ("title", Some("Loft, \"cozy\"")),
            ("notes", Some("line one\nline two")),
            ("price_per_night", None),
        ])];
        assert_eq!(
            render(&listings, OutputFormat::Csv),
            "title,notes,price_per_night\n\"Loft, \"\"cozy\"\"\",\"line one\nline two\",\n"
        );
    }

    #[test]
    fn test_csv_empty_list_writes_nothing() {
        assert_eq!(render(&[], OutputFormat::Csv), "");
    }
}
