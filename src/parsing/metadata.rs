//! Price and quantity annotations trailing an item name.
//!
//! Sellers annotate items with a small numeric grammar:
//!
//! | Text | Meaning |
//! |------|---------|
//! | `750`, `750p`, `750pp` | price 750 |
//! | `50k`, `1.5k` | price 50 000, 1 500 |
//! | `1.5` | price 1 500 (bare decimals are thousands) |
//! | `x2`, `x 2`, `2x`, `2 x` | quantity 2 |
//!
//! [`Metadata::parse`] recognizes one such token. The scanner feeds it the
//! text accumulated since the last committed item, one character at a time,
//! so valid *starts* of a token (`x`, `12.`) are reported as
//! [`Metadata::Incomplete`] rather than as a miss.

use std::sync::LazyLock;

use regex::Regex;

use crate::auction::Item;

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:x\s*(?P<pre>\d+(?:\.\d+)?)|(?P<post>\d+(?:\.\d+)?)\s*x)$")
        .expect("quantity pattern is valid")
});

static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<num>\d+(?:\.\d+)?)(?P<unit>pp|p|k)?$").expect("price pattern is valid")
});

static INCOMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:x\s*(?:\d+\.)?|\d+\.)$").expect("incomplete pattern is valid")
});

/// Bare `digits.digits` without a unit, read as thousands.
static THOUSANDS_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("shorthand pattern is valid"));

/// One recognized annotation token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metadata {
    /// Number of units for the last item.
    ///
    /// Fractions are truncated and literals beyond `u32::MAX` saturate to it.
    Quantity(u32),

    /// Price in base units. Zero leaves the item's price unchanged.
    Price(f64),

    /// A valid start of a token that carries no value yet (`x`, `12.`).
    Incomplete,
}

impl Metadata {
    /// Parses one annotation token, anchored after trimming.
    ///
    /// Returns `None` if the text doesn't conform to the grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use tradepack::parsing::Metadata;
    ///
    /// assert_eq!(Metadata::parse("50k"), Some(Metadata::Price(50_000.0)));
    /// assert_eq!(Metadata::parse("1.5"), Some(Metadata::Price(1_500.0)));
    /// assert_eq!(Metadata::parse(" x2 "), Some(Metadata::Quantity(2)));
    /// assert_eq!(Metadata::parse("x"), Some(Metadata::Incomplete));
    /// assert_eq!(Metadata::parse("50k x"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(caps) = QUANTITY.captures(text) {
            let literal = caps.name("pre").or_else(|| caps.name("post"))?.as_str();
            // Quantities are whole units; "x1.5" counts as 1.
            let quantity = literal
                .parse::<f64>()
                .map_or(0, |value| value.trunc().min(f64::from(u32::MAX)) as u32);
            return Some(Metadata::Quantity(quantity));
        }

        if let Some(caps) = PRICE.captures(text) {
            let literal = caps.name("num")?.as_str();
            let unit = caps.name("unit").map(|m| m.as_str().to_ascii_lowercase());
            let value = literal.parse::<f64>().unwrap_or(0.0);

            let multiplier = match unit.as_deref() {
                Some("k") => 1000.0,
                Some(_) => 1.0,
                None if THOUSANDS_SHORTHAND.is_match(literal) => 1000.0,
                None => 1.0,
            };

            return Some(Metadata::Price(value * multiplier));
        }

        INCOMPLETE.is_match(text).then_some(Metadata::Incomplete)
    }

    /// Returns `true` unless this is [`Metadata::Incomplete`].
    pub fn has_value(self) -> bool {
        !matches!(self, Metadata::Incomplete)
    }

    /// Writes this annotation into `item`.
    ///
    /// Quantities always overwrite. Prices overwrite only when positive.
    pub fn apply(self, item: &mut Item) {
        match self {
            Metadata::Quantity(quantity) => item.quantity = quantity,
            Metadata::Price(price) if price > 0.0 => item.price = price,
            Metadata::Price(_) | Metadata::Incomplete => {}
        }
    }
}

/// Matches trailing text against the annotation grammar for the last item.
///
/// Returns `None` when there is no item to annotate or the text doesn't
/// conform.
pub fn match_metadata(text: &str, items: &[Item]) -> Option<Metadata> {
    if items.is_empty() {
        return None;
    }
    Metadata::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::TradeMode;

    #[test]
    fn test_plain_prices() {
        assert_eq!(Metadata::parse("750"), Some(Metadata::Price(750.0)));
        assert_eq!(Metadata::parse("400pp"), Some(Metadata::Price(400.0)));
        assert_eq!(Metadata::parse("150p"), Some(Metadata::Price(150.0)));
        assert_eq!(Metadata::parse("150P"), Some(Metadata::Price(150.0)));
    }

    #[test]
    fn test_thousands() {
        assert_eq!(Metadata::parse("3k"), Some(Metadata::Price(3000.0)));
        assert_eq!(Metadata::parse("1.5k"), Some(Metadata::Price(1500.0)));
        assert_eq!(Metadata::parse("1.5K"), Some(Metadata::Price(1500.0)));
    }

    #[test]
    fn test_bare_decimal_is_thousands() {
        assert_eq!(Metadata::parse("1.5"), Some(Metadata::Price(1500.0)));
        assert_eq!(Metadata::parse("2.25"), Some(Metadata::Price(2250.0)));
        // with a unit the literal is taken at face value
        assert_eq!(Metadata::parse("1.5p"), Some(Metadata::Price(1.5)));
    }

    #[test]
    fn test_quantities() {
        assert_eq!(Metadata::parse("x2"), Some(Metadata::Quantity(2)));
        assert_eq!(Metadata::parse("X2"), Some(Metadata::Quantity(2)));
        assert_eq!(Metadata::parse("x 3"), Some(Metadata::Quantity(3)));
        assert_eq!(Metadata::parse("4x"), Some(Metadata::Quantity(4)));
        assert_eq!(Metadata::parse("5 x"), Some(Metadata::Quantity(5)));
        assert_eq!(Metadata::parse("x1.5"), Some(Metadata::Quantity(1)));
        assert_eq!(Metadata::parse("x0"), Some(Metadata::Quantity(0)));
    }

    #[test]
    fn test_oversized_quantity_saturates() {
        assert_eq!(Metadata::parse("x4294967295"), Some(Metadata::Quantity(u32::MAX)));
        assert_eq!(Metadata::parse("x99999999999999"), Some(Metadata::Quantity(u32::MAX)));
        assert_eq!(Metadata::parse("99999999999999 x"), Some(Metadata::Quantity(u32::MAX)));
    }

    #[test]
    fn test_incomplete_tokens() {
        assert_eq!(Metadata::parse("x"), Some(Metadata::Incomplete));
        assert_eq!(Metadata::parse("x "), Some(Metadata::Incomplete));
        assert_eq!(Metadata::parse("12."), Some(Metadata::Incomplete));
        assert_eq!(Metadata::parse("x 1."), Some(Metadata::Incomplete));
        assert!(!Metadata::Incomplete.has_value());
    }

    #[test]
    fn test_mismatches() {
        for text in ["", "   ", "k", "p", ".", "50k x", "x2k", "2kx", "abc", "50 k", "1,5", "-3"] {
            assert_eq!(Metadata::parse(text), None, "expected no match for {text:?}");
        }
    }

    #[test]
    fn test_zero_price_is_a_match() {
        assert_eq!(Metadata::parse("0"), Some(Metadata::Price(0.0)));
        assert_eq!(Metadata::parse("0k"), Some(Metadata::Price(0.0)));
    }

    #[test]
    fn test_apply_price_overwrites() {
        let mut item = Item::new("ale", TradeMode::Selling).with_price(500.0);
        Metadata::Price(200.0).apply(&mut item);
        assert_eq!(item.price, 200.0);

        Metadata::Price(0.0).apply(&mut item);
        assert_eq!(item.price, 200.0);
    }

    #[test]
    fn test_apply_quantity_overwrites() {
        let mut item = Item::new("ale", TradeMode::Selling).with_quantity(5);
        Metadata::Quantity(2).apply(&mut item);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, 0.0);

        Metadata::Incomplete.apply(&mut item);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_match_requires_item() {
        assert_eq!(match_metadata("50k", &[]), None);

        let items = vec![Item::new("ale", TradeMode::Selling)];
        assert_eq!(
            match_metadata("50k", &items),
            Some(Metadata::Price(50_000.0))
        );
    }
}
