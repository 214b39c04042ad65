//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::auction::{Auction, Item};
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes auctions to CSV with semicolon delimiter, one row per item.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Seller`, `Item`, `Price`, `Quantity`, `Side`
///   - With timestamps: `Timestamp` first
///   - With raw lines: `Raw` last
/// - Encoding: UTF-8
///
/// Auctions without items produce no rows.
pub fn write_csv(auctions: &[Auction], output_path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(auctions, file, config)
}

/// Converts auctions to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(auctions: &[Auction], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(auctions, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(auctions: &[Auction], out: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;

    for auction in auctions {
        for item in &auction.items {
            writer.write_record(build_record(auction, item, config))?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.extend(["Seller", "Item", "Price", "Quantity", "Side"]);

    if config.include_raw {
        header.push("Raw");
    }

    header
}

/// Build CSV record for a single listing.
fn build_record(auction: &Auction, item: &Item, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(auction.timestamp.clone());
    }

    record.push(auction.seller.clone());
    record.push(item.name.clone());
    record.push(item.price.to_string());
    record.push(item.quantity.to_string());
    record.push(item.side().to_string());

    if config.include_raw {
        record.push(auction.raw.clone());
    }

    record
}
