//! Flattening and aggregation over parsed auctions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::auction::{Auction, TradeMode};

/// One listing with its auction context, one row per item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub timestamp: String,
    pub seller: String,
    pub item: String,
    pub price: f64,
    pub quantity: u32,
    pub side: TradeMode,
}

/// Flattens auctions into listings, preserving order.
///
/// # Example
/// Input:  `Kandaar: [greaves 750, boots 1500]`
/// Output: `[(Kandaar, greaves, 750), (Kandaar, boots, 1500)]`
pub fn flatten_listings(auctions: &[Auction]) -> Vec<Listing> {
    auctions
        .iter()
        .flat_map(|auction| {
            auction.items.iter().map(|item| Listing {
                timestamp: auction.timestamp.clone(),
                seller: auction.seller.clone(),
                item: item.name.clone(),
                price: item.price,
                quantity: item.quantity,
                side: item.side(),
            })
        })
        .collect()
}

/// Statistics about a parse result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub auction_count: usize,
    pub item_count: usize,
    pub for_sale_count: usize,
    pub wanted_count: usize,
    pub priced_count: usize,
}

impl ProcessingStats {
    pub fn from_auctions(auctions: &[Auction]) -> Self {
        let mut stats = Self {
            auction_count: auctions.len(),
            ..Self::default()
        };
        for item in auctions.iter().flat_map(|a| &a.items) {
            stats.item_count += 1;
            if item.for_sale {
                stats.for_sale_count += 1;
            } else {
                stats.wanted_count += 1;
            }
            if item.has_price() {
                stats.priced_count += 1;
            }
        }
        stats
    }

    /// Average number of listings per auction.
    pub fn items_per_auction(&self) -> f64 {
        if self.auction_count == 0 {
            return 0.0;
        }
        self.item_count as f64 / self.auction_count as f64
    }
}

/// Price range observed for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub name: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Summarizes asking prices per item.
///
/// Only listings offered for sale with a stated price count. The result is
/// sorted by item name.
pub fn price_summary(auctions: &[Auction]) -> Vec<PriceSummary> {
    let mut prices: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for item in auctions.iter().flat_map(|a| a.for_sale()) {
        if item.has_price() {
            prices.entry(item.name.as_str()).or_default().push(item.price);
        }
    }

    prices
        .into_iter()
        .map(|(name, values)| {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            PriceSummary {
                name: name.to_string(),
                count: values.len(),
                min,
                max,
                mean,
            }
        })
        .collect()
}
