//! Unified error types for tradepack.
//!
//! This module provides a single [`TradepackError`] enum that covers all error
//! cases in the library, with a crate-wide [`Result`] alias.
//!
//! # Error Handling Philosophy
//!
//! - **Hard errors** (unreadable files, a line that is not an auction
//!   announcement, a broken catalog) surface as typed variants.
//! - **Soft misses** inside a scan (garbled text, unknown item names, a
//!   malformed price) never surface: the scanner resets locally and moves on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tradepack operations.
///
/// # Example
///
/// ```rust
/// use tradepack::error::Result;
/// use tradepack::Auction;
///
/// fn my_function() -> Result<Vec<Auction>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TradepackError>;

/// The error type for all tradepack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TradepackError {
    /// An I/O error occurred while reading a log or catalog, or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The raw line does not follow the auction announcement grammar
    /// (`[timestamp] Seller auctions, 'items'`).
    ///
    /// No scan is attempted for such a line.
    #[error("Line is not an auction announcement: {line}")]
    LineFormatMismatch {
        /// The offending line, verbatim
        line: String,
    },

    /// A file's structure doesn't match what its format promises.
    ///
    /// This occurs when:
    /// - A JSON catalog is neither a list of names nor a list of records
    /// - A CSV catalog has no name column
    /// - An output path has an unknown extension
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The catalog was read successfully but contained no usable item names.
    #[error("Catalog {} contains no item names", .path.display())]
    EmptyCatalog {
        /// Path of the catalog file
        path: PathBuf,
    },

    /// CSV reading or writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when in-memory output is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for TradepackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TradepackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TradepackError {
    /// Creates a line format mismatch error.
    pub fn line_mismatch(line: impl Into<String>) -> Self {
        TradepackError::LineFormatMismatch { line: line.into() }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TradepackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        TradepackError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an empty catalog error.
    pub fn empty_catalog(path: impl Into<PathBuf>) -> Self {
        TradepackError::EmptyCatalog { path: path.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TradepackError::Io(_))
    }

    /// Returns `true` if the error came from a line that is not an auction.
    pub fn is_line_mismatch(&self) -> bool {
        matches!(self, TradepackError::LineFormatMismatch { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TradepackError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, TradepackError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
