//! Configuration types for parsing.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use tradepack::config::ScanConfig;
//! use tradepack::TradeMode;
//!
//! let config = ScanConfig::new()
//!     .with_default_mode(TradeMode::Buying)
//!     .with_keep_empty(true)
//!     .with_buffer_size(128 * 1024);
//!
//! assert!(config.skip_invalid);
//! ```

use serde::{Deserialize, Serialize};

use crate::auction::TradeMode;

/// Configuration for auction log parsing.
///
/// Chat logs mix auction announcements with every other kind of line
/// (tells, say, system messages). By default the parser skips those
/// silently and drops announcements in which no known item was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Trade direction assumed before the first keyword (default: selling)
    pub default_mode: TradeMode,

    /// Skip non-auction lines instead of returning errors (default: true)
    pub skip_invalid: bool,

    /// Keep auctions in which no item was recognized (default: false)
    pub keep_empty: bool,

    /// Read buffer size for streaming (default: 64KB)
    pub buffer_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_mode: TradeMode::Selling,
            skip_invalid: true,
            keep_empty: false,
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl ScanConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that fails on the first non-auction line.
    pub fn strict() -> Self {
        Self {
            skip_invalid: false,
            ..Self::default()
        }
    }

    /// Sets the trade direction assumed before the first keyword.
    #[must_use]
    pub fn with_default_mode(mut self, mode: TradeMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Sets whether to skip non-auction lines.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    /// Sets whether to keep auctions without recognized items.
    #[must_use]
    pub fn with_keep_empty(mut self, keep: bool) -> Self {
        self.keep_empty = keep;
        self
    }

    /// Sets the buffer size for streaming.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}
