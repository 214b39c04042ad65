//! Prefix-searchable set of known terms.
//!
//! The [`Dictionary`] holds every term the scanner may recognize: the trade
//! keywords plus all item names from the catalog. Terms are stored
//! lower-cased in an ordered set, so a prefix query is a single range lookup.
//!
//! The dictionary is built once and then only read. It is `Send + Sync`;
//! share it between scans with an `Arc`.
//!
//! # Example
//!
//! ```
//! use tradepack::Dictionary;
//!
//! let dictionary = Dictionary::from_catalog(["Wurmslayer", "Mask of Wurms"]);
//!
//! assert!(dictionary.contains("wurmslayer"));
//! assert!(dictionary.contains("MASK OF WURMS"));
//! assert!(dictionary.has_prefix("mask o"));
//! assert!(!dictionary.contains("mask"));
//!
//! // trade keywords are always present
//! assert!(dictionary.contains("wts"));
//! ```

use std::collections::BTreeSet;
use std::ops::Bound;

/// Trade keywords seeded into every dictionary built from a catalog.
///
/// Keeping them in the dictionary lets a half-typed keyword survive the
/// prefix test until the scanner recognizes it.
pub const TRADE_KEYWORDS: &[&str] = &["selling", "buying", "wtb", "wts"];

/// Immutable, case-insensitive set of known terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    terms: BTreeSet<String>,
}

impl Dictionary {
    /// Creates an empty dictionary (no keywords).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dictionary holding only the [`TRADE_KEYWORDS`].
    pub fn with_keywords() -> Self {
        let mut dictionary = Self::new();
        for keyword in TRADE_KEYWORDS {
            dictionary.insert(keyword);
        }
        dictionary
    }

    /// Builds a ready dictionary from the trade keywords and a stream of
    /// catalog item names.
    ///
    /// Names are lower-cased; empty and whitespace-only names are ignored.
    pub fn from_catalog<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::with_keywords();
        dictionary.extend(names);
        dictionary
    }

    /// Adds a term. Returns `false` if the term was empty or already present.
    pub fn insert(&mut self, term: impl AsRef<str>) -> bool {
        let term = term.as_ref().trim();
        if term.is_empty() {
            return false;
        }
        self.terms.insert(term.to_lowercase())
    }

    /// Returns `true` if `term` is an exact member (case-insensitive).
    pub fn contains(&self, term: &str) -> bool {
        if term.chars().any(char::is_uppercase) {
            self.terms.contains(&term.to_lowercase())
        } else {
            self.terms.contains(term)
        }
    }

    /// Returns `true` if some member starts with `prefix` (case-insensitive).
    ///
    /// The empty string is a prefix of every member, so this is `true` for
    /// `""` on any non-empty dictionary.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        if prefix.chars().any(char::is_uppercase) {
            return self.has_lowercase_prefix(&prefix.to_lowercase());
        }
        self.has_lowercase_prefix(prefix)
    }

    fn has_lowercase_prefix(&self, prefix: &str) -> bool {
        // The smallest member >= prefix is the only candidate that can start with it.
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|term| term.starts_with(prefix))
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the dictionary holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over all terms in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for term in iter {
            self.insert(term);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}
