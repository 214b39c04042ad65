//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::auction::{Auction, Item};
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Auction view for JSON output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonAuction<'a> {
    seller: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<&'a str>,
    items: &'a [Item],
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
}

impl<'a> JsonAuction<'a> {
    pub(super) fn new(auction: &'a Auction, config: &OutputConfig) -> Self {
        Self {
            seller: &auction.seller,
            timestamp: config
                .include_timestamps
                .then_some(auction.timestamp.as_str()),
            items: &auction.items,
            raw: config.include_raw.then_some(auction.raw.as_str()),
        }
    }
}

/// Writes auctions to JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"seller": "Kandaar", "items": [{"name": "mithril greaves", "price": 750.0, "quantity": 1, "for_sale": true}]}
/// ]
/// ```
pub fn write_json(auctions: &[Auction], output_path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let json = to_json(auctions, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts auctions to a pretty-printed JSON array.
pub fn to_json(auctions: &[Auction], config: &OutputConfig) -> Result<String> {
    let records: Vec<JsonAuction<'_>> = auctions
        .iter()
        .map(|a| JsonAuction::new(a, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::TradeMode;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Auction> {
        vec![
            Auction::new("Kandaar", "Mon Jan 09 20:34:30 2017")
                .with_raw("[Mon Jan 09 20:34:30 2017] Kandaar auctions, 'WTS Mithril Greaves 750'")
                .with_items(vec![
                    Item::new("mithril greaves", TradeMode::Selling).with_price(750.0),
                ]),
        ]
    }

    #[test]
    fn test_to_json_basic() {
        let json = to_json(&sample(), &OutputConfig::new()).unwrap();

        assert!(json.contains(r#""seller": "Kandaar""#));
        assert!(json.contains(r#""name": "mithril greaves""#));
        assert!(json.contains(r#""for_sale": true"#));
        assert!(!json.contains("timestamp"));
        assert!(!json.contains("raw"));
    }

    #[test]
    fn test_to_json_round_trips_items() {
        let json = to_json(&sample(), &OutputConfig::all()).unwrap();
        let parsed: Vec<Auction> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0].timestamp, "Mon Jan 09 20:34:30 2017");
        assert_eq!(parsed[0].items, sample()[0].items);
        assert!(parsed[0].raw.contains("auctions"));
    }

    #[test]
    fn test_write_json_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_json(&sample(), temp_file.path(), &OutputConfig::new().with_timestamps()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains(r#""timestamp": "Mon Jan 09 20:34:30 2017""#));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_json(&[], &OutputConfig::new()).unwrap(), "[]");
    }
}
