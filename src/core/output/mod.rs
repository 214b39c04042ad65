//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter, one row per item - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of auctions - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one auction per line - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case | Shape |
//! |--------|----------|-------|
//! | CSV | Spreadsheets, price history | flat, one row per listing |
//! | JSON | Structured data, APIs | nested, auctions with items |
//! | JSONL | Appending, streaming into other tools | nested, one auction per line |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> tradepack::Result<()> {
//! use tradepack::core::output::{write_csv, write_json, write_jsonl, to_csv};
//! use tradepack::core::models::OutputConfig;
//! use tradepack::{Auction, Item, TradeMode};
//!
//! let auctions = vec![
//!     Auction::new("Kandaar", "Mon Jan 09 20:34:30 2017")
//!         .with_items(vec![Item::new("mithril greaves", TradeMode::Selling).with_price(750.0)]),
//! ];
//!
//! let config = OutputConfig::new().with_timestamps();
//!
//! // Write to files
//! write_csv(&auctions, "output.csv", &config)?;
//! write_json(&auctions, "output.json", &config)?;
//! write_jsonl(&auctions, "output.jsonl", &config)?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&auctions, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
