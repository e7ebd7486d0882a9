//! Resolver output and tier ranking.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{CurrencyCode, NormalizedPrice};

/// Reliability rank of a candidate source; lower ranks are tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    /// Structured linked data.
    StructuredData = 1,
    /// Semantic markup attributes.
    SemanticMarkup = 2,
    /// Named data attributes.
    DataAttribute = 3,
    /// Class-like selectors.
    ClassSelector = 4,
}

impl PriceTier {
    /// Every tier in evaluation order.
    pub const ALL: [Self; 4] = [
        Self::StructuredData,
        Self::SemanticMarkup,
        Self::DataAttribute,
        Self::ClassSelector,
    ];

    /// Numeric rank, 1 is most reliable.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Snake-case name used in logs and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StructuredData => "structured_data",
            Self::SemanticMarkup => "semantic_markup",
            Self::DataAttribute => "data_attribute",
            Self::ClassSelector => "class_selector",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The winning price, its currency, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPrice {
    /// Normalized price.
    pub price: NormalizedPrice,
    /// Resolved currency.
    pub currency: CurrencyCode,
    /// Tier that produced the value.
    pub tier: PriceTier,
    /// Concrete key or selector used (`offers`, `itemprop`, `data-price`, `.money`).
    pub origin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ranked_in_order() {
        let ranks: Vec<u8> = PriceTier::ALL.iter().map(|t| t.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert!(PriceTier::StructuredData < PriceTier::ClassSelector);
    }

    #[test]
    fn tier_serializes_snake_case() {
        let json = serde_json::to_string(&PriceTier::DataAttribute).unwrap();
        assert_eq!(json, "\"data_attribute\"");
        assert_eq!(PriceTier::SemanticMarkup.to_string(), "semantic_markup");
    }
}
