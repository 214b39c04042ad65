//! JSON Lines (JSONL) output writer.
//!
//! One auction per line. JSONL suits logs that keep growing: new results can
//! be appended without rewriting the file, and readers can process it one
//! record at a time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::auction::Auction;
use crate::core::models::OutputConfig;
use crate::error::Result;

use super::json_writer::JsonAuction;

/// Writes auctions to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"seller":"Kandaar","items":[{"name":"mithril greaves","price":750.0,"quantity":1,"for_sale":true}]}
/// {"seller":"Bob","items":[{"name":"ale","price":0.0,"quantity":2,"for_sale":false}]}
/// ```
pub fn write_jsonl(auctions: &[Auction], output_path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(auctions, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts auctions to a JSONL string.
pub fn to_jsonl(auctions: &[Auction], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(auctions, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(auctions: &[Auction], writer: &mut W, config: &OutputConfig) -> Result<()> {
    for auction in auctions {
        serde_json::to_writer(&mut *writer, &JsonAuction::new(auction, config))?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::{Item, TradeMode};
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Auction> {
        vec![
            Auction::new("Kandaar", "Mon Jan 09 20:34:30 2017").with_items(vec![
                Item::new("mithril greaves", TradeMode::Selling).with_price(750.0),
            ]),
            Auction::new("Bob", "Mon Jan 09 20:35:00 2017")
                .with_items(vec![Item::new("ale", TradeMode::Buying).with_quantity(2)]),
        ]
    }

    #[test]
    fn test_to_jsonl_one_auction_per_line() {
        let jsonl = to_jsonl(&sample(), &OutputConfig::new()).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("seller").is_some());
            assert!(value.get("timestamp").is_none());
        }
        assert!(lines[1].contains(r#""for_sale":false"#));
    }

    #[test]
    fn test_write_jsonl_with_timestamps() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&sample(), temp_file.path(), &OutputConfig::new().with_timestamps()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains(r#""timestamp":"Mon Jan 09 20:34:30 2017""#));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_jsonl(&[], &OutputConfig::new()).unwrap(), "");
    }
}
