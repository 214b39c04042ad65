//! Filter auctions by date range, seller, trade side and item name.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering auction collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Level | Description |
//! |--------|--------|-------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | auction | Announced on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | auction | Announced on or before date |
//! | Seller | [`with_seller`](FilterConfig::with_seller) | auction | Announced by this character |
//! | Side | [`with_side`](FilterConfig::with_side) | item | Only listings for sale, or only wanted |
//! | Item | [`with_item`](FilterConfig::with_item) | item | Item name contains text |
//!
//! # Examples
//!
//! ```
//! use tradepack::core::filter::{FilterConfig, apply_filters};
//! use tradepack::{Auction, Item, TradeMode};
//!
//! # fn main() -> tradepack::Result<()> {
//! let auctions = vec![
//!     Auction::new("Kandaar", "Mon Jan 09 20:34:30 2017").with_items(vec![
//!         Item::new("mithril greaves", TradeMode::Selling),
//!         Item::new("ale", TradeMode::Buying),
//!     ]),
//!     Auction::new("Joeleen", "Mon Feb 15 17:49:20 2016")
//!         .with_items(vec![Item::new("hexed kerran doll", TradeMode::Selling)]),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2017-01-01")?
//!     .with_side(TradeMode::Selling);
//!
//! let filtered = apply_filters(auctions, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].items.len(), 1);
//! assert_eq!(filtered[0].items[0].name, "mithril greaves");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Auctions whose timestamp doesn't parse are **excluded** when date filters are active
//! - Seller matching is case-insensitive for ASCII characters
//! - Auctions left without items after item-level filtering are dropped
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use crate::auction::{Auction, Item, TradeMode};
use crate::error::TradepackError;

/// Configuration for filtering auctions.
///
/// Filters are combined with AND logic.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only auctions on or after this day.
    pub after: Option<NaiveDate>,

    /// Include only auctions on or before this day.
    pub before: Option<NaiveDate>,

    /// Include only auctions from this seller (case-insensitive).
    pub seller: Option<String>,

    /// Keep only listings on this side of the trade.
    pub side: Option<TradeMode>,

    /// Keep only listings whose name contains this text (lower-case).
    pub item: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all auctions pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TradepackError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, TradepackError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TradepackError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, TradepackError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the seller filter.
    ///
    /// ```
    /// use tradepack::core::filter::FilterConfig;
    ///
    /// // Matches "Kandaar", "kandaar", "KANDAAR"
    /// let config = FilterConfig::new().with_seller("Kandaar");
    /// ```
    #[must_use]
    pub fn with_seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = Some(seller.into());
        self
    }

    /// Keeps only listings on one side of the trade.
    #[must_use]
    pub fn with_side(mut self, side: TradeMode) -> Self {
        self.side = Some(side);
        self
    }

    /// Keeps only listings whose name contains `text` (case-insensitive).
    #[must_use]
    pub fn with_item(mut self, text: impl AsRef<str>) -> Self {
        self.item = Some(text.as_ref().trim().to_lowercase());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.seller.is_some() || self.has_item_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if a listing-level filter is active.
    pub fn has_item_filter(&self) -> bool {
        self.side.is_some() || self.item.is_some()
    }

    /// Returns `true` if the auction passes the date and seller filters.
    pub fn matches_auction(&self, auction: &Auction) -> bool {
        if let Some(ref seller) = self.seller {
            if !auction.seller.eq_ignore_ascii_case(seller) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(day) = auction.parsed_timestamp().map(|ts| ts.date()) else {
                return false;
            };
            if self.after.is_some_and(|after| day < after) {
                return false;
            }
            if self.before.is_some_and(|before| day > before) {
                return false;
            }
        }

        true
    }

    /// Returns `true` if the listing passes the side and item filters.
    pub fn matches_item(&self, item: &Item) -> bool {
        if self.side.is_some_and(|side| item.side() != side) {
            return false;
        }
        if let Some(ref text) = self.item {
            if !item.name.contains(text.as_str()) {
                return false;
            }
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, TradepackError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TradepackError::invalid_date(date_str))
}

/// Filters auctions based on the provided configuration.
///
/// Auction-level filters drop whole auctions; listing-level filters drop
/// items, and an auction left with no items is dropped as well.
pub fn apply_filters(auctions: Vec<Auction>, config: &FilterConfig) -> Vec<Auction> {
    if !config.is_active() {
        return auctions;
    }

    auctions
        .into_iter()
        .filter(|auction| config.matches_auction(auction))
        .filter_map(|mut auction| {
            if config.has_item_filter() {
                auction.items.retain(|item| config.matches_item(item));
                if auction.items.is_empty() {
                    return None;
                }
            }
            Some(auction)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_auction(seller: &str, timestamp: &str, items: &[(&str, TradeMode)]) -> Auction {
        Auction::new(seller, timestamp).with_items(
            items
                .iter()
                .map(|(name, mode)| Item::new(*name, *mode))
                .collect(),
        )
    }

    fn sample() -> Vec<Auction> {
        vec![
            make_auction(
                "Joeleen",
                "Mon Feb 15 17:49:20 2016",
                &[("hexed kerran doll", TradeMode::Selling)],
            ),
            make_auction(
                "Kandaar",
                "Mon Jan 09 20:34:30 2017",
                &[
                    ("mithril greaves", TradeMode::Selling),
                    ("mask of wurms", TradeMode::Buying),
                ],
            ),
            make_auction("kandaar", "garbled", &[("ale", TradeMode::Selling)]),
        ]
    }

    #[test]
    fn test_inactive_passes_everything() {
        let filtered = apply_filters(sample(), &FilterConfig::new());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_by_seller() {
        let filtered = apply_filters(sample(), &FilterConfig::new().with_seller("KANDAAR"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|a| a.seller.eq_ignore_ascii_case("kandaar")));
    }

    #[test]
    fn test_filter_by_date_from() {
        let config = FilterConfig::new().with_date_from("2017-01-01").unwrap();
        let filtered = apply_filters(sample(), &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].seller, "Kandaar");
    }

    #[test]
    fn test_filter_by_date_to_is_inclusive() {
        let config = FilterConfig::new().with_date_to("2016-02-15").unwrap();
        let filtered = apply_filters(sample(), &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].seller, "Joeleen");
    }

    #[test]
    fn test_unparseable_timestamp_excluded_when_date_filter() {
        let config = FilterConfig::new().with_date_from("2000-01-01").unwrap();
        let filtered = apply_filters(sample(), &config);
        assert!(filtered.iter().all(|a| a.timestamp != "garbled"));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(TradepackError::InvalidDate { .. })));
    }

    #[test]
    fn test_filter_by_side_drops_items_and_empty_auctions() {
        let config = FilterConfig::new().with_side(TradeMode::Buying);
        let filtered = apply_filters(sample(), &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].items.len(), 1);
        assert_eq!(filtered[0].items[0].name, "mask of wurms");
    }

    #[test]
    fn test_filter_by_item_substring() {
        let config = FilterConfig::new().with_item(" Greaves ");
        let filtered = apply_filters(sample(), &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].items[0].name, "mithril greaves");
    }

    #[test]
    fn test_combined_filters() {
        let config = FilterConfig::new()
            .with_seller("kandaar")
            .with_date_to("2020-01-01")
            .unwrap()
            .with_side(TradeMode::Selling);

        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].items[0].name, "mithril greaves");
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_seller("Bob").is_active());
        assert!(FilterConfig::new().with_side(TradeMode::Buying).is_active());
        assert!(FilterConfig::new().with_date_to("2024-01-01").unwrap().is_active());
    }
}
