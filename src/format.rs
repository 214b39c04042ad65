//! Output format selection.
//!
//! [`OutputFormat`] names the three result layouts and maps them to file
//! extensions; [`write_to_format`] and [`to_format_string`] dispatch to the
//! matching writer in [`core::output`](crate::core::output).
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> tradepack::Result<()> {
//! use tradepack::format::{OutputFormat, to_format_string};
//! use tradepack::core::models::OutputConfig;
//! use tradepack::{Auction, Item, TradeMode};
//!
//! let auctions = vec![
//!     Auction::new("Bob", "Mon Jan 09 20:34:30 2017")
//!         .with_items(vec![Item::new("ale", TradeMode::Selling).with_price(5.0)]),
//! ];
//!
//! let format = OutputFormat::from_path("prices.csv")?;
//! let csv = to_format_string(&auctions, format, &OutputConfig::new())?;
//! assert!(csv.contains("Bob;ale;5;1;selling"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::auction::Auction;
use crate::core::models::OutputConfig;
use crate::error::TradepackError;

/// Result layout for parsed auctions.
///
/// - [`Csv`](OutputFormat::Csv) - flat, one row per listing
/// - [`Json`](OutputFormat::Json) - array of auctions with nested items
/// - [`Jsonl`](OutputFormat::Jsonl) - one auction object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of auctions
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Cargo feature the writer for this format needs.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use tradepack::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/prices.JSONL").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("prices.xlsx").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TradepackError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(TradepackError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> TradepackError {
    TradepackError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

/// Writes auctions to a file in the specified format.
///
/// # Errors
///
/// Returns an error if the required feature for the format is not enabled
/// or the file cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    auctions: &[Auction],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), TradepackError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(auctions, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(auctions, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(auctions, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts auctions to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    auctions: &[Auction],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, TradepackError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(auctions, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(auctions, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(auctions, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
