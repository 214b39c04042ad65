//! Auction line extraction.
//!
//! Announcements in the chat log look like:
//!
//! ```text
//! [Mon Jan 09 20:34:30 2017] Kandaar auctions, 'WTS Mithril Greaves 750 , Lodizal Shell Boots 1.5'
//! ```
//!
//! The extractor splits such a line into its timestamp, seller and quoted
//! body. Everything else in the log (tells, say, system messages) fails the
//! grammar and yields [`TradepackError::LineFormatMismatch`].

use std::sync::LazyLock;

use regex::Regex;

use crate::auction::Auction;
use crate::error::TradepackError;

/// Full-line pattern: `[timestamp] Seller auction(s), 'body'`.
pub const AUCTION_LINE_PATTERN: &str =
    r"^\[(?P<timestamp>[A-Za-z0-9: ]+)\] (?P<seller>[A-Za-z]+) auctions?, '(?P<items>.+)'$";

static AUCTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AUCTION_LINE_PATTERN).expect("auction line pattern is valid"));

/// Returns `true` if `line` follows the announcement grammar.
pub fn is_auction_line(line: &str) -> bool {
    AUCTION_LINE.is_match(strip_line_ending(line))
}

/// Splits a raw chat line into an [`Auction`] with no items yet.
///
/// The returned auction carries the bracketed timestamp (without brackets),
/// the seller, the quoted body as its item text, and the raw line verbatim.
///
/// # Example
///
/// ```
/// use tradepack::parsing::extract_line;
///
/// let auction = extract_line("[Mon Feb 15 17:49:20 2016] Joeleen auctions, 'WTS Hexed Kerran Doll 200p'")?;
/// assert_eq!(auction.timestamp, "Mon Feb 15 17:49:20 2016");
/// assert_eq!(auction.seller, "Joeleen");
/// assert_eq!(auction.item_text(), "WTS Hexed Kerran Doll 200p");
/// assert!(auction.items.is_empty());
/// # Ok::<(), tradepack::TradepackError>(())
/// ```
pub fn extract_line(line: &str) -> Result<Auction, TradepackError> {
    let trimmed = strip_line_ending(line);
    let caps = AUCTION_LINE
        .captures(trimmed)
        .ok_or_else(|| TradepackError::line_mismatch(trimmed))?;

    let timestamp = caps.name("timestamp").map_or("", |m| m.as_str());
    let seller = caps.name("seller").map_or("", |m| m.as_str());
    let items = caps.name("items").map_or("", |m| m.as_str());

    Ok(Auction::new(seller, timestamp)
        .with_item_text(items)
        .with_raw(line))
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
