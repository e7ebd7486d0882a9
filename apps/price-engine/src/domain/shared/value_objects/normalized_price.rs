//! Normalized price value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::domain::shared::DomainError;

/// Separator convention a numeric string was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NumberFormat {
    /// `1,234.56`: comma groups, period decimal.
    Us,
    /// `1.234,56`: period groups, comma decimal.
    Eu,
}

impl NumberFormat {
    /// The decimal separator for this convention.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::Us => '.',
            Self::Eu => ',',
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Eu => "EU",
        }
    }
}

/// An exact, base-10 price.
///
/// Wraps a [`Decimal`] so the scale of the source text survives (`1,20` stays
/// `1.20`, not `1.2`). Serializes as a string so no consumer ever sees a
/// binary float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPrice(Decimal);

impl NormalizedPrice {
    /// Create a new price from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Rebuild a price from its persisted canonical text.
    ///
    /// Uses exact parsing: text that would need rounding is rejected.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not an exact decimal.
    pub fn from_canonical(text: &str) -> Result<Self, DomainError> {
        Decimal::from_str_exact(text.trim())
            .map(Self)
            .map_err(|e| DomainError::invalid_value("price", format!("'{text}': {e}")))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Number of digits after the decimal point.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Zero or negative prices are scraping-error sentinels, not real prices.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.0 <= Decimal::ZERO
    }

    /// Canonical text for persistence (`1234.56`, scale preserved).
    #[must_use]
    pub fn to_canonical(&self) -> String {
        self.0.to_string()
    }

    /// Render without grouping in the given convention.
    ///
    /// Feeding the result back through the normalizer with the matching hint
    /// yields the same value.
    #[must_use]
    pub fn render(&self, format: NumberFormat) -> String {
        let canonical = self.to_canonical();
        match format {
            NumberFormat::Us => canonical,
            NumberFormat::Eu => canonical.replace('.', ","),
        }
    }
}

impl Default for NormalizedPrice {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for NormalizedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sub for NormalizedPrice {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<Decimal> for NormalizedPrice {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<NormalizedPrice> for Decimal {
    fn from(value: NormalizedPrice) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_keeps_scale() {
        let p = NormalizedPrice::new(dec!(1.20));
        assert_eq!(p.scale(), 2);
        assert_eq!(p.to_canonical(), "1.20");
    }

    #[test]
    fn price_from_canonical() {
        let p = NormalizedPrice::from_canonical("1234.56").unwrap();
        assert_eq!(p.amount(), dec!(1234.56));
    }

    #[test]
    fn price_from_canonical_rejects_garbage() {
        assert!(NormalizedPrice::from_canonical("12.3.4").is_err());
        assert!(NormalizedPrice::from_canonical("").is_err());
    }

    #[test]
    fn price_sentinel() {
        assert!(NormalizedPrice::ZERO.is_sentinel());
        assert!(NormalizedPrice::new(dec!(-1)).is_sentinel());
        assert!(!NormalizedPrice::new(dec!(0.01)).is_sentinel());
        assert!(NormalizedPrice::new(dec!(0.01)).is_positive());
    }

    #[test]
    fn price_render_eu() {
        let p = NormalizedPrice::new(dec!(1234.56));
        assert_eq!(p.render(NumberFormat::Eu), "1234,56");
        assert_eq!(p.render(NumberFormat::Us), "1234.56");
    }

    #[test]
    fn price_ordering_and_sub() {
        let a = NormalizedPrice::new(dec!(249.99));
        let b = NormalizedPrice::new(dec!(199.99));
        assert!(a > b);
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn price_ordering_ignores_scale() {
        let coarse = NormalizedPrice::new(dec!(1.2));
        let fine = NormalizedPrice::new(dec!(1.20));
        assert_eq!(coarse.cmp(&fine), std::cmp::Ordering::Equal);
        assert_eq!(
            [dec!(3), dec!(1.50), dec!(2.25)]
                .into_iter()
                .map(NormalizedPrice::new)
                .max(),
            Some(NormalizedPrice::new(dec!(3)))
        );
    }

    #[test]
    fn price_from_canonical_reports_invalid_value() {
        let err = NormalizedPrice::from_canonical("12,50").unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { ref field, .. } if field == "price"));
    }

    #[test]
    fn price_serde_as_string() {
        let p = NormalizedPrice::new(dec!(99.90));
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"99.90\"");
        let parsed: NormalizedPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn number_format_separators() {
        assert_eq!(NumberFormat::Us.decimal_separator(), '.');
        assert_eq!(NumberFormat::Eu.decimal_separator(), ',');
        assert_eq!(NumberFormat::Eu.as_str(), "EU");
    }
}
