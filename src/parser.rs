//! Auction log parser.
//!
//! [`AuctionParser`] ties the pieces together: it runs every line of a chat
//! log through the line extractor, scans the quoted body of each auction
//! against a shared [`Dictionary`], and applies the [`ScanConfig`] rules for
//! non-auction lines and auctions without recognized items.
//!
//! # Example
//!
//! ```rust
//! use tradepack::parser::AuctionParser;
//! use tradepack::Dictionary;
//!
//! let dictionary = Dictionary::from_catalog(["Mithril Greaves", "Lodizal Shell Boots"]);
//! let parser = AuctionParser::new(dictionary);
//!
//! let log = "\
//! [Mon Jan 09 20:34:30 2017] Kandaar auctions, 'WTS Mithril Greaves 750 , Lodizal Shell Boots 1.5'
//! [Mon Jan 09 20:34:31 2017] Kandaar tells you, 'hi'
//! ";
//!
//! let auctions = parser.parse_str(log)?;
//! assert_eq!(auctions.len(), 1);
//! assert_eq!(auctions[0].items[1].price, 1500.0);
//! # Ok::<(), tradepack::TradepackError>(())
//! ```
//!
//! # Streaming
//!
//! For large logs, [`AuctionParser::stream`] yields auctions one line at a
//! time instead of loading the whole file:
//!
//! ```rust,no_run
//! # #[cfg(feature = "streaming")]
//! # fn main() -> tradepack::Result<()> {
//! use tradepack::parser::AuctionParser;
//! use tradepack::catalog::load_dictionary;
//!
//! let parser = AuctionParser::new(load_dictionary("items.txt")?);
//! for auction in parser.stream("eqlog.txt")? {
//!     let auction = auction?;
//!     println!("{}: {} items", auction.seller, auction.items.len());
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "streaming"))]
//! # fn main() {}
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::auction::Auction;
use crate::config::ScanConfig;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::parsing::{Scanner, extract_line};

#[cfg(feature = "streaming")]
use crate::streaming::AuctionIterator;

/// Parses auction chat logs against a shared dictionary.
///
/// Cloning is cheap: the dictionary sits behind an [`Arc`], so clones can be
/// handed to worker threads.
#[derive(Debug, Clone)]
pub struct AuctionParser {
    dictionary: Arc<Dictionary>,
    config: ScanConfig,
}

impl AuctionParser {
    /// Creates a parser with the default configuration.
    pub fn new(dictionary: impl Into<Arc<Dictionary>>) -> Self {
        Self::with_config(dictionary, ScanConfig::default())
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(dictionary: impl Into<Arc<Dictionary>>, config: ScanConfig) -> Self {
        Self {
            dictionary: dictionary.into(),
            config,
        }
    }

    /// Returns the dictionary shared by all scans.
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Extracts and scans one line, ignoring the skip/keep rules.
    ///
    /// # Errors
    ///
    /// Returns [`TradepackError::LineFormatMismatch`](crate::TradepackError::LineFormatMismatch)
    /// if the line is not an auction announcement.
    pub fn parse_line(&self, line: &str) -> Result<Auction> {
        let mut auction = extract_line(line)?;
        self.scanner().scan_auction(&mut auction);
        Ok(auction)
    }

    /// Parses one log line under the configured rules.
    ///
    /// Returns `Ok(None)` for blank lines, skipped non-auction lines and
    /// dropped empty auctions.
    pub fn process_line(&self, line: &str) -> Result<Option<Auction>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let auction = match self.parse_line(line) {
            Ok(auction) => auction,
            Err(e) if self.config.skip_invalid && e.is_line_mismatch() => {
                debug!(line = line.trim_end(), "skipped non-auction line");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if auction.is_empty() && !self.config.keep_empty {
            debug!(seller = %auction.seller, "no known items");
            return Ok(None);
        }

        Ok(Some(auction))
    }

    /// Parses log content already in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Auction>> {
        let mut auctions = Vec::new();
        for line in content.lines() {
            if let Some(auction) = self.process_line(line)? {
                auctions.push(auction);
            }
        }
        Ok(auctions)
    }

    /// Reads and parses a whole log file.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<Auction>> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        // Game logs are not guaranteed to be valid UTF-8.
        let content = String::from_utf8_lossy(&bytes);
        let auctions = self.parse_str(&content)?;
        info!(path = %path.display(), auctions = auctions.len(), "parsed log");
        Ok(auctions)
    }

    /// Streams auctions from a log file with constant memory.
    #[cfg(feature = "streaming")]
    pub fn stream(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<AuctionIterator<std::io::BufReader<fs::File>>> {
        AuctionIterator::open(path, self.clone())
    }

    fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.dictionary).with_mode(self.config.default_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::TradeMode;

    const LOG: &str = "\
[Mon Feb 15 17:49:20 2016] Joeleen auctions, 'WTS Cat Eye Platinum Necklace 150p | Hexed Kerran Doll 200p'
[Mon Feb 15 17:49:21 2016] Joeleen tells you, 'still there?'

[Mon Feb 15 17:50:02 2016] Sneeki auctions, 'BUYING Rogue Epic : D'
[Mon Feb 15 17:51:40 2016] Babanker auctions, 'WTB Hexed Kerran Doll 150p'
";

    fn parser(config: ScanConfig) -> AuctionParser {
        let dictionary = Dictionary::from_catalog([
            "Cat Eye Platinum Necklace",
            "Hexed Kerran Doll",
        ]);
        AuctionParser::with_config(dictionary, config)
    }

    #[test]
    fn test_parse_str_default_rules() {
        let auctions = parser(ScanConfig::default()).parse_str(LOG).unwrap();

        assert_eq!(auctions.len(), 2);
        assert_eq!(auctions[0].seller, "Joeleen");
        assert_eq!(auctions[0].items.len(), 2);
        assert_eq!(auctions[1].seller, "Babanker");
        assert_eq!(auctions[1].items[0].side(), TradeMode::Buying);
        assert_eq!(auctions[1].items[0].price, 150.0);
    }

    #[test]
    fn test_keep_empty() {
        let auctions = parser(ScanConfig::new().with_keep_empty(true))
            .parse_str(LOG)
            .unwrap();

        assert_eq!(auctions.len(), 3);
        assert_eq!(auctions[1].seller, "Sneeki");
        assert!(auctions[1].is_empty());
    }

    #[test]
    fn test_strict_fails_on_first_mismatch() {
        let err = parser(ScanConfig::strict()).parse_str(LOG).unwrap_err();
        assert!(err.is_line_mismatch());
        assert!(err.to_string().contains("still there?"));
    }

    #[test]
    fn test_parse_line_ignores_rules() {
        let auction = parser(ScanConfig::default())
            .parse_line("[Mon Feb 15 17:50:02 2016] Sneeki auctions, 'BUYING Rogue Epic : D'")
            .unwrap();
        assert!(auction.is_empty());
    }

    #[test]
    fn test_default_mode_from_config() {
        let parser = parser(ScanConfig::new().with_default_mode(TradeMode::Buying));
        let auction = parser
            .parse_line("[Mon Feb 15 17:50:02 2016] Sneeki auctions, 'Hexed Kerran Doll'")
            .unwrap();
        assert!(!auction.items[0].for_sale);
    }

    #[test]
    fn test_parse_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LOG.as_bytes()).unwrap();

        let auctions = parser(ScanConfig::default()).parse(file.path()).unwrap();
        assert_eq!(auctions.len(), 2);
    }

    #[test]
    fn test_parse_file_with_invalid_utf8() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xff\xfe garbage\n").unwrap();
        file.write_all(LOG.as_bytes()).unwrap();

        let auctions = parser(ScanConfig::default()).parse(file.path()).unwrap();
        assert_eq!(auctions.len(), 2);
    }

    #[test]
    fn test_clones_share_dictionary() {
        let parser = parser(ScanConfig::default());
        let clone = parser.clone();
        assert!(Arc::ptr_eq(parser.dictionary(), clone.dictionary()));
    }
}
