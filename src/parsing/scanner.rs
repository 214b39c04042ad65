//! Incremental item tokenizer.
//!
//! The scanner walks the quoted body of an announcement one character at a
//! time and matches the growing buffer against the [`Dictionary`]:
//!
//! - while the buffer is a prefix of some term, it keeps growing;
//! - when the next character kills the prefix, the last live prefix is
//!   committed as an [`Item`] if it is an exact member (maximal munch);
//! - the character that killed the prefix is carried over into the next
//!   token, so run-on names like `wurmslayerale` still split;
//! - text that matches no term is offered to the [metadata](super::metadata)
//!   grammar as a price or quantity for the last item;
//! - `wts`/`selling` and `wtb`/`buying`/`trading` switch the trade direction.
//!
//! All state lives in [`ScanState`], and [`ScanState::step`] is the whole
//! transition function, so each rule can be exercised on its own.
//!
//! # Example
//!
//! ```
//! use tradepack::{Dictionary, Scanner, TradeMode};
//!
//! let dictionary = Dictionary::from_catalog(["bronze girdle", "ale"]);
//! let scanner = Scanner::new(&dictionary);
//!
//! let items = scanner.scan("WTS Bronze Girdle 50k x2 WTB ale");
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].name, "bronze girdle");
//! assert_eq!(items[0].price, 50_000.0);
//! assert_eq!(items[0].quantity, 2);
//! assert_eq!(items[1].side(), TradeMode::Buying);
//! ```

use tracing::{debug, trace};

use crate::auction::{Auction, Item, TradeMode};
use crate::dictionary::Dictionary;
use crate::error::TradepackError;

use super::line::extract_line;
use super::metadata::{Metadata, match_metadata};

/// Buffer substrings that switch the scan to [`TradeMode::Selling`].
pub const SELL_KEYWORDS: &[&str] = &["wts", "selling"];

/// Buffer substrings that switch the scan to [`TradeMode::Buying`].
pub const BUY_KEYWORDS: &[&str] = &["wtb", "buying", "trading"];

/// Returns the trade direction announced by a keyword inside `buffer`.
///
/// Selling keywords are checked first.
pub fn keyword_mode(buffer: &str) -> Option<TradeMode> {
    if SELL_KEYWORDS.iter().any(|kw| buffer.contains(kw)) {
        Some(TradeMode::Selling)
    } else if BUY_KEYWORDS.iter().any(|kw| buffer.contains(kw)) {
        Some(TradeMode::Buying)
    } else {
        None
    }
}

/// State threaded through a scan.
///
/// A fresh state is created for every line; it is never shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanState {
    mode: TradeMode,
    buffer: String,
    skipped: Option<char>,
    last_prefix_match: String,
    pending: Option<Metadata>,
}

impl ScanState {
    /// Creates a state starting in `mode`.
    pub fn new(mode: TradeMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Returns the current trade direction.
    pub fn mode(&self) -> TradeMode {
        self.mode
    }

    /// Returns the accumulated candidate text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the character carried over from the last commit, if any.
    pub fn skipped(&self) -> Option<char> {
        self.skipped
    }

    /// Returns the last buffer value that was a live dictionary prefix.
    pub fn last_prefix_match(&self) -> &str {
        &self.last_prefix_match
    }

    /// Returns the annotation parsed from the current metadata token.
    pub fn pending(&self) -> Option<Metadata> {
        self.pending
    }

    /// Feeds one lower-cased character.
    ///
    /// `is_last` must be `true` for the final character of the text; a live
    /// prefix is committed immediately in that case.
    pub fn step(&mut self, c: char, is_last: bool, dictionary: &Dictionary, items: &mut Vec<Item>) {
        self.buffer.push(c);

        if let Some(mode) = keyword_mode(&self.buffer) {
            debug!(?mode, buffer = %self.buffer, "trade keyword");
            self.flush_pending(items);
            self.mode = mode;
            self.reset();
            return;
        }

        if let Some(skipped) = self.skipped.take() {
            self.buffer.insert(0, skipped);
        }

        if dictionary.has_prefix(self.buffer.trim_start()) {
            trace!(buffer = %self.buffer, "live prefix");
            self.last_prefix_match.clone_from(&self.buffer);
            if is_last {
                self.commit(dictionary, items);
                self.reset();
            }
            return;
        }

        if !self.last_prefix_match.is_empty() {
            if self.commit(dictionary, items) {
                self.carry_over(c);
                return;
            }
            // A dead prefix such as "1" before "1.5" may still be a price.
            if self.collect(items) {
                return;
            }
            self.carry_over(c);
            return;
        }

        if self.collect(items) {
            return;
        }
        self.restart_from_last_word(is_last, dictionary, items);
    }

    /// Ends the scan: writes back pending metadata and commits a dangling
    /// live prefix.
    pub fn finish(mut self, dictionary: &Dictionary, items: &mut Vec<Item>) -> TradeMode {
        if !self.last_prefix_match.is_empty() {
            self.commit(dictionary, items);
        }
        self.flush_pending(items);
        self.mode
    }

    /// Commits the last live prefix if it is an exact member.
    ///
    /// Clears `last_prefix_match` either way and returns whether an item was
    /// appended.
    fn commit(&mut self, dictionary: &Dictionary, items: &mut Vec<Item>) -> bool {
        let candidate = std::mem::take(&mut self.last_prefix_match);
        let name = candidate.trim();
        if !dictionary.contains(name) {
            trace!(candidate = %name, "prefix never resolved");
            return false;
        }

        self.flush_pending(items);
        debug!(item = %name, mode = ?self.mode, "committed item");
        items.push(Item::new(name, self.mode));
        true
    }

    /// Offers the buffer to the metadata grammar; keeps it on a match.
    fn collect(&mut self, items: &[Item]) -> bool {
        match match_metadata(&self.buffer, items) {
            Some(metadata) => {
                if metadata.has_value() {
                    self.pending = Some(metadata);
                }
                true
            }
            None => false,
        }
    }

    /// Restarts from the current word after the buffer failed every rule.
    ///
    /// `50k x` fails as a whole, but its last word `x` opens a quantity; a
    /// price followed by a space and a name restarts on the name.
    ///
    /// The text before the last word is a finished token and is parsed again
    /// before the restart. `750 x` reads as a quantity, so without this the
    /// price of `750 x2` would be lost.
    fn restart_from_last_word(&mut self, is_last: bool, dictionary: &Dictionary, items: &mut Vec<Item>) {
        let split = self.buffer.rsplit_once(char::is_whitespace);
        let word = split
            .map(|(_, word)| word.to_string())
            .filter(|word| !word.is_empty());

        if let Some((head, _)) = split {
            if let Some(metadata) = Metadata::parse(head).filter(|m| m.has_value()) {
                trace!(%head, ?metadata, "finished token before restart");
                self.pending = Some(metadata);
            }
        }
        self.flush_pending(items);
        self.reset();

        let Some(word) = word else {
            return;
        };

        self.buffer = word;
        if dictionary.has_prefix(&self.buffer) {
            self.last_prefix_match.clone_from(&self.buffer);
            if is_last {
                self.commit(dictionary, items);
                self.reset();
            }
        } else if !self.collect(items) {
            self.reset();
        }
    }

    /// After a commit point: `c` seeds the next token unless it is
    /// whitespace.
    fn carry_over(&mut self, c: char) {
        self.skipped = (!c.is_whitespace()).then_some(c);
        self.buffer.clear();
    }

    fn flush_pending(&mut self, items: &mut [Item]) {
        if let Some(metadata) = self.pending.take() {
            if let Some(item) = items.last_mut() {
                debug!(item = %item.name, ?metadata, "annotated item");
                metadata.apply(item);
            }
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.skipped = None;
        self.last_prefix_match.clear();
    }
}

/// Scans item text against a shared dictionary.
///
/// A scanner is cheap to create and holds no per-line state, so one scanner
/// can serve any number of lines, including from several threads.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'d> {
    dictionary: &'d Dictionary,
    default_mode: TradeMode,
}

impl<'d> Scanner<'d> {
    /// Creates a scanner that starts every line in [`TradeMode::Selling`].
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            default_mode: TradeMode::default(),
        }
    }

    /// Sets the trade direction assumed before the first keyword.
    #[must_use]
    pub fn with_mode(mut self, mode: TradeMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Returns the dictionary this scanner matches against.
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Scans an item-text blob and returns the recognized listings.
    pub fn scan(&self, item_text: &str) -> Vec<Item> {
        let mut items = Vec::new();
        self.scan_into(item_text, &mut items);
        items
    }

    /// Scans the item text of `auction`, appending to its items.
    pub fn scan_auction(&self, auction: &mut Auction) {
        let text = auction.item_text().to_string();
        self.scan_into(&text, &mut auction.items);
    }

    /// Extracts and scans one raw chat line.
    ///
    /// Fails with [`TradepackError::LineFormatMismatch`] if the line is not an
    /// auction announcement.
    pub fn scan_line(&self, line: &str) -> Result<Auction, TradepackError> {
        let mut auction = extract_line(line)?;
        self.scan_auction(&mut auction);
        Ok(auction)
    }

    fn scan_into(&self, item_text: &str, items: &mut Vec<Item>) {
        let lowered = item_text.to_lowercase();
        let mut state = ScanState::new(self.default_mode);
        let mut chars = lowered.chars().peekable();

        while let Some(c) = chars.next() {
            let is_last = chars.peek().is_none();
            state.step(c, is_last, self.dictionary, items);
        }

        state.finish(self.dictionary, items);
    }
}

/// Scans `item_text` starting in `mode`.
///
/// Shorthand for `Scanner::new(dictionary).with_mode(mode).scan(item_text)`.
pub fn scan_items(dictionary: &Dictionary, item_text: &str, mode: TradeMode) -> Vec<Item> {
    Scanner::new(dictionary).with_mode(mode).scan(item_text)
}
