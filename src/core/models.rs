//! Output configuration.

use serde::{Deserialize, Serialize};

/// Configuration for output format.
/// Controls which optional columns are included in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include the auction timestamp
    pub include_timestamps: bool,
    /// Include the raw chat line
    pub include_raw: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables every optional column.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_raw: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_raw(mut self) -> Self {
        self.include_raw = true;
        self
    }
}
