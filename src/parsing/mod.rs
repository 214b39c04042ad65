//! Line extraction and item scanning.
//!
//! - [`line`] splits a raw chat line into timestamp, seller and quoted body
//! - [`scanner`] walks the body and recognizes item names
//! - [`metadata`] parses the price and quantity annotations after a name
//!
//! Both the in-memory [`AuctionParser`](crate::parser::AuctionParser) and the
//! streaming [`AuctionIterator`](crate::streaming::AuctionIterator) are thin
//! loops over these functions.

pub mod line;
pub mod metadata;
pub mod scanner;

pub use line::{AUCTION_LINE_PATTERN, extract_line, is_auction_line};
pub use metadata::{Metadata, match_metadata};
pub use scanner::{ScanState, Scanner, keyword_mode, scan_items};
