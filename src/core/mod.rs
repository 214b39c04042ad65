//! Post-processing of parsed auctions.
//!
//! This module contains:
//! - [`models`] - Output configuration
//! - [`filter`] - Auction filtering by date, seller, side and item
//! - [`processor`] - Flattening, statistics and price summaries
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use tradepack::core::{
//!     OutputConfig, FilterConfig, ProcessingStats,
//!     apply_filters, flatten_listings, price_summary,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

pub use processor::{Listing, PriceSummary, ProcessingStats, flatten_listings, price_summary};
