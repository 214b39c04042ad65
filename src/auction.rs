//! Auction and item types produced by the scanner.
//!
//! An [`Auction`] is one announcement line from the chat log. Its [`Item`]s
//! are the trade listings the scanner recognized in the quoted body, in the
//! order they were detected.
//!
//! # Examples
//!
//! ```
//! use tradepack::{Auction, Item, TradeMode};
//!
//! let auction = Auction::new("Kandaar", "Mon Jan 09 20:34:30 2017")
//!     .with_items(vec![Item::new("mithril greaves", TradeMode::Selling).with_price(750.0)]);
//!
//! assert_eq!(auction.items.len(), 1);
//! assert!(auction.items[0].for_sale);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use tradepack::{Auction, Item, TradeMode};
//!
//! let auction = Auction::new("Joeleen", "Mon Feb 15 17:49:20 2016")
//!     .with_items(vec![Item::new("hexed kerran doll", TradeMode::Selling)]);
//! let json = serde_json::to_string(&auction)?;
//! let parsed: Auction = serde_json::from_str(&json)?;
//!
//! assert_eq!(auction, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the game client, e.g. `Mon Jan 09 20:34:30 2017`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Trade direction of an announcement segment.
///
/// The scanner switches between the two whenever it reads a direction
/// keyword (`wts`/`selling` or `wtb`/`buying`/`trading`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeMode {
    /// The seller is offering the item ("WTS").
    #[default]
    Selling,

    /// The seller wants to acquire the item ("WTB").
    Buying,
}

impl TradeMode {
    /// Returns `true` for [`TradeMode::Selling`].
    pub fn is_selling(self) -> bool {
        self == TradeMode::Selling
    }

    /// Returns all accepted names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["selling", "sell", "wts", "buying", "buy", "wtb"]
    }
}

impl std::fmt::Display for TradeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeMode::Selling => write!(f, "selling"),
            TradeMode::Buying => write!(f, "buying"),
        }
    }
}

impl std::str::FromStr for TradeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "selling" | "sell" | "wts" => Ok(TradeMode::Selling),
            "buying" | "buy" | "wtb" => Ok(TradeMode::Buying),
            _ => Err(format!(
                "Unknown trade mode: '{}'. Expected one of: {}",
                s,
                TradeMode::all_names().join(", ")
            )),
        }
    }
}

/// A single trade listing recognized inside an auction line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Lower-cased, trimmed item name. Always an exact dictionary member.
    pub name: String,

    /// Asking/offered price in base currency units (0 when not stated).
    pub price: f64,

    /// Number of units (1 when not stated).
    pub quantity: u32,

    /// `true` when announced under a selling keyword.
    pub for_sale: bool,
}

impl Item {
    /// Creates an item with default price (0) and quantity (1).
    pub fn new(name: impl Into<String>, mode: TradeMode) -> Self {
        Self {
            name: name.into(),
            price: 0.0,
            quantity: 1,
            for_sale: mode.is_selling(),
        }
    }

    /// Builder method to set the price.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builder method to set the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Returns the trade direction of this listing.
    pub fn side(&self) -> TradeMode {
        if self.for_sale {
            TradeMode::Selling
        } else {
            TradeMode::Buying
        }
    }

    /// Returns `true` if a price was recognized for this listing.
    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }
}

/// One auction announcement and the listings found in it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Auction {
    /// Name of the character who sent the announcement.
    pub seller: String,

    /// Timestamp exactly as it appears between the brackets.
    pub timestamp: String,

    /// Listings in detection order.
    #[serde(default)]
    pub items: Vec<Item>,

    /// The raw chat line.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub raw: String,

    #[serde(skip)]
    item_text: String,
}

impl Auction {
    /// Creates an auction with no items.
    pub fn new(seller: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            seller: seller.into(),
            timestamp: timestamp.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the quoted item text that will be scanned.
    #[must_use]
    pub fn with_item_text(mut self, text: impl Into<String>) -> Self {
        self.item_text = text.into();
        self
    }

    /// Builder method to set the raw line.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Builder method to set the items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Returns the quoted body of the announcement.
    pub fn item_text(&self) -> &str {
        &self.item_text
    }

    /// Parses [`timestamp`](Self::timestamp) using [`TIMESTAMP_FORMAT`].
    ///
    /// Returns `None` when the text doesn't follow the game client layout.
    ///
    /// ```
    /// use tradepack::Auction;
    ///
    /// let auction = Auction::new("Kandaar", "Mon Jan 09 20:34:30 2017");
    /// let ts = auction.parsed_timestamp().unwrap();
    /// assert_eq!(ts.format("%Y-%m-%d").to_string(), "2017-01-09");
    /// ```
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.timestamp.trim(), TIMESTAMP_FORMAT).ok()
    }

    /// Returns `true` if no listing was recognized.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the listings announced for sale.
    pub fn for_sale(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.for_sale)
    }

    /// Iterates over the listings the seller wants to buy.
    pub fn wanted(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.for_sale)
    }
}
