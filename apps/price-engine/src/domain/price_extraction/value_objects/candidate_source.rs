//! Candidate price sources handed over by the page collaborators.

use serde::{Deserialize, Serialize};

use super::PriceTier;

/// A single offer from structured linked data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Raw price text.
    #[serde(default)]
    pub price: Option<String>,
    /// Raw currency field.
    #[serde(default, alias = "priceCurrency")]
    pub price_currency: Option<String>,
}

/// The offer field of structured data is either one object or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OfferShape {
    /// A single offer object.
    Single(Offer),
    /// A list of offers; only the first is considered.
    Multiple(Vec<Offer>),
}

impl OfferShape {
    /// The offer extraction reads from: the first of a list, or the single one.
    #[must_use]
    pub fn primary(&self) -> Option<&Offer> {
        match self {
            Self::Single(offer) => Some(offer),
            Self::Multiple(offers) => offers.first(),
        }
    }
}

/// One place a price might have been found, ranked by [`PriceTier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CandidateSource {
    /// Structured linked data (`offers` of a product record).
    StructuredData {
        /// Offer object or list of offers.
        offers: OfferShape,
    },
    /// Semantic markup price/currency attribute pair.
    SemanticMarkup {
        /// Raw price attribute.
        #[serde(default)]
        price: Option<String>,
        /// Raw currency attribute.
        #[serde(default)]
        currency: Option<String>,
    },
    /// A named data attribute such as `data-price`.
    DataAttribute {
        /// Attribute name.
        name: String,
        /// Raw attribute value.
        #[serde(default)]
        price: Option<String>,
        /// Raw currency, if the page exposed one.
        #[serde(default)]
        currency: Option<String>,
    },
    /// Text matched by a class-like selector such as `.price`.
    ClassSelector {
        /// Selector that matched.
        selector: String,
        /// Raw matched text.
        #[serde(default)]
        price: Option<String>,
        /// Raw currency, if the page exposed one.
        #[serde(default)]
        currency: Option<String>,
    },
}

impl CandidateSource {
    /// The tier this candidate belongs to.
    #[must_use]
    pub const fn tier(&self) -> PriceTier {
        match self {
            Self::StructuredData { .. } => PriceTier::StructuredData,
            Self::SemanticMarkup { .. } => PriceTier::SemanticMarkup,
            Self::DataAttribute { .. } => PriceTier::DataAttribute,
            Self::ClassSelector { .. } => PriceTier::ClassSelector,
        }
    }

    /// Raw price and currency fields, whatever the variant.
    #[must_use]
    pub fn raw_fields(&self) -> (Option<&str>, Option<&str>) {
        match self {
            Self::StructuredData { offers } => offers.primary().map_or((None, None), |offer| {
                (offer.price.as_deref(), offer.price_currency.as_deref())
            }),
            Self::SemanticMarkup { price, currency }
            | Self::DataAttribute {
                price, currency, ..
            }
            | Self::ClassSelector {
                price, currency, ..
            } => (price.as_deref(), currency.as_deref()),
        }
    }
}
