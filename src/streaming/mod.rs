//! Streaming auction parsing for memory-efficient processing of large logs.
//!
//! Game chat logs grow without bound; a log kept for years easily reaches
//! several gigabytes. [`AuctionIterator`] reads one line at a time through a
//! buffered reader and yields each auction as soon as it's scanned.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use tradepack::parser::AuctionParser;
//! use tradepack::streaming::AuctionIterator;
//! use tradepack::Dictionary;
//!
//! let log = "[Mon Jan 09 20:34:30 2017] Bob auctions, 'wts ale 5'\nnoise\n";
//! let parser = AuctionParser::new(Dictionary::from_catalog(["ale"]));
//!
//! let mut iter = AuctionIterator::new(Cursor::new(log), Some(log.len() as u64), parser);
//! let auction = iter.next().unwrap()?;
//! assert_eq!(auction.items[0].price, 5.0);
//! assert!(iter.next().is_none());
//! assert_eq!(iter.progress(), Some(100.0));
//! # Ok::<(), tradepack::TradepackError>(())
//! ```
//!
//! # Memory Usage
//!
//! | Approach | 1GB log | 10GB log |
//! |----------|---------|----------|
//! | [`AuctionParser::parse`](crate::parser::AuctionParser::parse) | ~1.5GB RAM | ~15GB RAM |
//! | [`AuctionIterator`] | buffer + one line | buffer + one line |

mod iterator;

pub use iterator::AuctionIterator;
