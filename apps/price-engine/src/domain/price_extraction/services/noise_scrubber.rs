//! Noise Scrubber
//!
//! Removes marketing copy, and the reference prices attached to it, before
//! looking for the transactional price.

use std::sync::OnceLock;

use regex::Regex;

use super::decimal_normalizer::normalize;
use crate::domain::price_extraction::errors::ExtractionError;
use crate::domain::price_extraction::value_objects::LocaleHint;
use crate::domain::shared::NormalizedPrice;

/// Currency symbols that may lead an amount, in noise and price matches alike.
const CURRENCY_SYMBOL: &str = "[$£€¥₹₽₩฿]";

/// Grouped amount (`1,234.56`, `1.234,56`, `1 234`) or a plain digit run,
/// with an optional two-digit fraction.
const AMOUNT: &str = r"([0-9]{1,3}(?:[.,\s][0-9]{3})+(?:[.,][0-9]{2})?|[0-9]+(?:[.,][0-9]{2})?)";

/// Noise patterns, applied in this order to lowercased text.
fn noise_patterns() -> [String; 4] {
    [
        // Reference prices: the phrase and its number go together.
        format!(
            r"\b(?:was|originally|msrp|rrp|old price|list price|regular price|compare at)\s*[:\s]?\s*{CURRENCY_SYMBOL}?\s*[0-9]+(?:[.,][0-9]+)*"
        ),
        // Savings claims, amount or percentage.
        format!(r"\(\s*save\s*{CURRENCY_SYMBOL}?\s*[0-9]+(?:[.,][0-9]+)*\s*%?\s*\)"),
        // Qualifiers only; the price after them stays.
        r"\b(?:from|as low as|starting at)\b".to_string(),
        r"\b(?:per\s+\w+|each)\b".to_string(),
    ]
}

struct Patterns {
    noise: Vec<Regex>,
    symbol_price: Regex,
    loose_price: Regex,
}

#[allow(clippy::expect_used)] // Patterns are compile-time constants
fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();

    PATTERNS.get_or_init(|| Patterns {
        noise: noise_patterns()
            .iter()
            .map(|p| Regex::new(p).expect("noise pattern is valid"))
            .collect(),
        symbol_price: Regex::new(&format!(r"{CURRENCY_SYMBOL}\s*{AMOUNT}"))
            .expect("symbol price regex is valid"),
        loose_price: Regex::new(AMOUNT).expect("loose price regex is valid"),
    })
}

/// Lowercase `text` and strip every noise pattern from it.
///
/// Exposed for diagnostics; [`extract_clean_price`] calls it first.
#[must_use]
pub fn scrub_noise(text: &str) -> String {
    let mut cleaned = text.to_lowercase();
    for pattern in &patterns().noise {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    cleaned
}

/// Find the transactional price in a snippet of marketing copy.
///
/// A symbol-prefixed amount is preferred; otherwise the first bare amount is
/// used. Separators are interpreted with [`LocaleHint::Auto`].
///
/// # Errors
///
/// Returns [`ExtractionError::NoPriceFound`] if no amount survives scrubbing,
/// or the normalizer's error if the matched amount cannot be parsed.
pub fn extract_clean_price(text: &str) -> Result<NormalizedPrice, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::no_price_found("empty text"));
    }

    let cleaned = scrub_noise(text);
    let patterns = patterns();

    let amount = patterns
        .symbol_price
        .captures(&cleaned)
        .or_else(|| patterns.loose_price.captures(&cleaned))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            ExtractionError::no_price_found(format!("no amount left after scrubbing {text:?}"))
        })?;

    tracing::debug!(text, amount, "Isolated transactional price");

    normalize(amount, LocaleHint::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case("Was $129.99 Now $99.99", dec!(99.99) ; "was price removed")]
    #[test_case("$49.99 (Save $10.00)", dec!(49.99) ; "savings clause removed")]
    #[test_case("MSRP $199.00 Our Price $149", dec!(149) ; "msrp removed")]
    #[test_case("From $29.99", dec!(29.99) ; "qualifier keeps price")]
    #[test_case("Originally: £80 now £64.50", dec!(64.50) ; "originally with colon")]
    #[test_case("€1.234,56 (save 20%)", dec!(1234.56) ; "eu grouped with percent claim")]
    #[test_case("$1234.56", dec!(1234.56) ; "ungrouped amount")]
    #[test_case("$1,299.00 each", dec!(1299.00) ; "per unit qualifier")]
    #[test_case("Starting at 15.00", dec!(15.00) ; "loose fallback")]
    #[test_case("List price $300 Sale ₹2,499", dec!(2499) ; "rupee symbol")]
    #[test_case("Was ₹2,999 Now ₹1,999", dec!(1999) ; "rupee was price removed")]
    #[test_case("RRP ₩50,000 now ₩39,000", dec!(39000) ; "won rrp removed")]
    #[test_case("฿1,290 (Save ฿300)", dec!(1290) ; "baht savings clause removed")]
    fn extract_clean_price_cases(text: &str, expected: Decimal) {
        assert_eq!(extract_clean_price(text).unwrap().amount(), expected);
    }

    #[test]
    fn symbol_match_beats_earlier_bare_number() {
        let price = extract_clean_price("Pack of 3 for $12.00").unwrap();
        assert_eq!(price.amount(), dec!(12.00));
    }

    #[test]
    fn no_price_after_scrubbing() {
        let err = extract_clean_price("Was $50").unwrap_err();
        assert_eq!(err.code(), "NO_PRICE_FOUND");
        assert!(matches!(
            extract_clean_price("Sold out"),
            Err(ExtractionError::NoPriceFound { .. })
        ));
    }

    #[test]
    fn empty_text_is_no_price() {
        assert!(matches!(
            extract_clean_price("   "),
            Err(ExtractionError::NoPriceFound { .. })
        ));
    }

    #[test]
    fn scrub_noise_lowercases_and_strips() {
        let scrubbed = scrub_noise("RRP $20 Now $15 per item");
        assert!(!scrubbed.contains("rrp"));
        assert!(!scrubbed.contains("20"));
        assert!(!scrubbed.contains("per item"));
        assert!(scrubbed.contains("now $15"));
    }
}
