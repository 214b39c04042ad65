//! # tradepack
//!
//! A Rust library for extracting structured trade listings from in-game
//! auction chat logs.
//!
//! ## Overview
//!
//! Players announce trades in free-form chat:
//!
//! ```text
//! [Mon Jan 09 20:34:30 2017] Kandaar auctions, 'WTS Mithril Greaves 750 , Lodizal Shell Boots 1.5'
//! ```
//!
//! tradepack turns each such line into an [`Auction`] whose [`Item`]s carry
//! a catalog item name, a price, a quantity and a trade direction. Item
//! names are recognized by greedy prefix matching against a [`Dictionary`]
//! built from an item catalog, so run-on text like `wurmslayermask of wurms`
//! still splits into known names.
//!
//! ## Quick Start
//!
//! ```rust
//! use tradepack::prelude::*;
//!
//! let parser = AuctionParser::new(Dictionary::from_catalog(["Ale", "Mask of Wurms"]));
//! let auction = parser.parse_line(
//!     "[Mon Feb 15 17:49:20 2016] Joeleen auctions, 'wts ale 5p x10 wtb mask of wurms 2k'",
//! )?;
//!
//! assert_eq!(auction.items.len(), 2);
//! assert_eq!(auction.items[0].quantity, 10);
//! assert!(!auction.items[1].for_sale);
//! assert_eq!(auction.items[1].price, 2000.0);
//! # Ok::<(), TradepackError>(())
//! ```
//!
//! ## Module Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`auction`] | [`Auction`], [`Item`], [`TradeMode`] |
//! | [`dictionary`] | [`Dictionary`] prefix set |
//! | [`catalog`] | Loading item catalogs (text, JSON, CSV) |
//! | [`parsing`] | Line extractor, metadata parser, [`Scanner`] |
//! | [`parser`] | [`AuctionParser`] for whole logs |
//! | [`config`] | [`ScanConfig`](config::ScanConfig) |
//! | [`core`] | Filtering, statistics, output writers |
//! | [`format`] | [`OutputFormat`](format::OutputFormat) dispatch |
//! | `streaming` | Line-by-line iterator (feature `streaming`) |
//! | `cli` | clap argument types (feature `cli`) |
//! | [`error`] | [`TradepackError`], [`Result`] |

pub mod auction;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
#[cfg(feature = "streaming")]
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use auction::{Auction, Item, TradeMode};
pub use dictionary::Dictionary;
pub use error::{Result, TradepackError};
pub use parser::AuctionParser;
pub use parsing::Scanner;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tradepack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auction::{Auction, Item, TradeMode};
    pub use crate::dictionary::Dictionary;
    pub use crate::error::{Result, TradepackError};

    pub use crate::catalog::{load_catalog, load_dictionary};
    pub use crate::config::ScanConfig;
    pub use crate::parser::AuctionParser;
    pub use crate::parsing::{Metadata, Scanner, scan_items};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::processor::{ProcessingStats, flatten_listings, price_summary};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, write_to_format};

    #[cfg(feature = "streaming")]
    pub use crate::streaming::AuctionIterator;
}
