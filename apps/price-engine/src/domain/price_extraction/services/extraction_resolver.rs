//! Extraction Resolver
//!
//! Picks the first usable price among candidate sources, most reliable tier
//! first.

use serde::{Deserialize, Serialize};

use super::currency_resolver::resolve_explicit_currency;
use super::decimal_normalizer::normalize;
use crate::domain::price_extraction::errors::ExtractionError;
use crate::domain::price_extraction::value_objects::{
    CandidateSource, LocaleHint, OfferShape, PriceTier, ResolvedPrice,
};

/// Data attributes consulted, in order.
pub const DATA_ATTRIBUTE_KEYS: [&str; 3] = ["data-price", "data-product-price", "data-price-amount"];

/// Class selectors consulted, in order.
pub const CLASS_SELECTORS: [&str; 6] = [
    ".product-price",
    ".price-value-2",
    ".projected-price",
    ".money",
    ".price",
    ".product__single__price",
];

/// Resolver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Separator convention applied to every raw price.
    pub locale_hint: LocaleHint,
    /// Country of the proxy the page was fetched through.
    pub proxy_country: Option<String>,
}

/// Tiered price resolver.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResolver {
    options: ResolverOptions,
}

impl ExtractionResolver {
    /// Create a resolver with the given options.
    #[must_use]
    pub const fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    #[must_use]
    pub const fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve the price from a bundle of candidates.
    ///
    /// Tiers are evaluated from [`PriceTier::StructuredData`] down to
    /// [`PriceTier::ClassSelector`]. Within a tier, data attributes and
    /// selectors follow their fixed key order and other candidates keep the
    /// order given. The first non-empty value that normalizes wins; values
    /// that fail to normalize are skipped. Data attributes and selectors
    /// outside the fixed lists are never consulted.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::NoPriceFound`] when every tier is exhausted.
    pub fn resolve_price(
        &self,
        candidates: &[CandidateSource],
    ) -> Result<ResolvedPrice, ExtractionError> {
        for tier in PriceTier::ALL {
            for (candidate, origin) in Self::tier_candidates(tier, candidates) {
                if let Some(resolved) = self.try_candidate(candidate, origin) {
                    tracing::info!(
                        tier = resolved.tier.as_str(),
                        rank = resolved.tier.rank(),
                        origin = %resolved.origin,
                        price = %resolved.price,
                        currency = %resolved.currency,
                        "Price resolved"
                    );
                    return Ok(resolved);
                }
            }
        }

        Err(ExtractionError::no_price_found(format!(
            "all {} tiers exhausted across {} candidates",
            PriceTier::ALL.len(),
            candidates.len()
        )))
    }

    /// Candidates of one tier in evaluation order, paired with their origin label.
    fn tier_candidates(
        tier: PriceTier,
        candidates: &[CandidateSource],
    ) -> Vec<(&CandidateSource, String)> {
        let in_tier = candidates.iter().filter(|c| c.tier() == tier);

        match tier {
            PriceTier::StructuredData => in_tier
                .map(|c| {
                    let origin = match c {
                        CandidateSource::StructuredData {
                            offers: OfferShape::Multiple(_),
                        } => "offers[0]",
                        _ => "offers",
                    };
                    (c, origin.to_string())
                })
                .collect(),
            PriceTier::SemanticMarkup => in_tier.map(|c| (c, "itemprop".to_string())).collect(),
            PriceTier::DataAttribute => {
                Self::by_key_order(in_tier.collect(), &DATA_ATTRIBUTE_KEYS, |c| match c {
                    CandidateSource::DataAttribute { name, .. } => Some(name.trim()),
                    _ => None,
                })
            }
            PriceTier::ClassSelector => {
                Self::by_key_order(in_tier.collect(), &CLASS_SELECTORS, |c| match c {
                    CandidateSource::ClassSelector { selector, .. } => Some(selector.trim()),
                    _ => None,
                })
            }
        }
    }

    /// Reorder keyed candidates to follow `keys`, dropping unknown keys.
    fn by_key_order<'a>(
        candidates: Vec<&'a CandidateSource>,
        keys: &[&str],
        key_of: impl Fn(&CandidateSource) -> Option<&str>,
    ) -> Vec<(&'a CandidateSource, String)> {
        let matches = |key: &str, wanted: &str| {
            key.trim_start_matches('.')
                .eq_ignore_ascii_case(wanted.trim_start_matches('.'))
        };

        for candidate in &candidates {
            if let Some(key) = key_of(*candidate) {
                if !keys.iter().any(|wanted| matches(key, wanted)) {
                    tracing::debug!(key, "Ignoring candidate with unrecognized key");
                }
            }
        }

        keys.iter()
            .flat_map(|wanted| {
                candidates
                    .iter()
                    .filter(|c| key_of(**c).is_some_and(|key| matches(key, wanted)))
                    .map(|c| (*c, (*wanted).to_string()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn try_candidate(&self, candidate: &CandidateSource, origin: String) -> Option<ResolvedPrice> {
        let tier = candidate.tier();
        let (raw_price, raw_currency) = candidate.raw_fields();

        let raw_price = raw_price.map(str::trim).filter(|p| !p.is_empty())?;

        let price = match normalize(raw_price, self.options.locale_hint) {
            Ok(price) => price,
            Err(e) => {
                tracing::debug!(
                    tier = tier.as_str(),
                    origin = %origin,
                    raw_price,
                    error = %e,
                    "Skipping unparseable candidate"
                );
                return None;
            }
        };

        let currency =
            resolve_explicit_currency(raw_currency, self.options.proxy_country.as_deref());

        Some(ResolvedPrice {
            price,
            currency,
            tier,
            origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_extraction::value_objects::Offer;
    use rust_decimal_macros::dec;

    fn selector(selector: &str, price: &str) -> CandidateSource {
        CandidateSource::ClassSelector {
            selector: selector.to_string(),
            price: Some(price.to_string()),
            currency: None,
        }
    }

    fn attribute(name: &str, price: &str) -> CandidateSource {
        CandidateSource::DataAttribute {
            name: name.to_string(),
            price: Some(price.to_string()),
            currency: None,
        }
    }

    fn structured(price: &str, currency: Option<&str>) -> CandidateSource {
        CandidateSource::StructuredData {
            offers: OfferShape::Single(Offer {
                price: Some(price.to_string()),
                price_currency: currency.map(str::to_string),
            }),
        }
    }

    #[test]
    fn structured_data_beats_class_selector() {
        let resolver = ExtractionResolver::default();
        let candidates = vec![selector(".price", "$25.00"), structured("19.99", Some("EUR"))];

        let resolved = resolver.resolve_price(&candidates).unwrap();

        assert_eq!(resolved.price.amount(), dec!(19.99));
        assert_eq!(resolved.currency.as_str(), "EUR");
        assert_eq!(resolved.tier, PriceTier::StructuredData);
        assert_eq!(resolved.origin, "offers");
    }

    #[test]
    fn class_selector_alone_is_used() {
        let resolver = ExtractionResolver::default();
        let resolved = resolver
            .resolve_price(&[selector(".money", "$25.00")])
            .unwrap();

        assert_eq!(resolved.price.amount(), dec!(25.00));
        assert_eq!(resolved.currency.as_str(), "USD");
        assert_eq!(resolved.tier, PriceTier::ClassSelector);
        assert_eq!(resolved.origin, ".money");
    }

    #[test]
    fn first_offer_of_list_is_read() {
        let resolver = ExtractionResolver::default();
        let candidates = vec![CandidateSource::StructuredData {
            offers: OfferShape::Multiple(vec![
                Offer {
                    price: Some("10.00".to_string()),
                    price_currency: Some("GBP".to_string()),
                },
                Offer {
                    price: Some("5.00".to_string()),
                    price_currency: Some("GBP".to_string()),
                },
            ]),
        }];

        let resolved = resolver.resolve_price(&candidates).unwrap();
        assert_eq!(resolved.price.amount(), dec!(10.00));
        assert_eq!(resolved.origin, "offers[0]");
    }

    #[test]
    fn empty_and_unparseable_values_fall_through() {
        let resolver = ExtractionResolver::default();
        let candidates = vec![
            structured("", None),
            CandidateSource::SemanticMarkup {
                price: Some("Call us".to_string()),
                currency: Some("USD".to_string()),
            },
            attribute("data-price", "12.50"),
        ];

        let resolved = resolver.resolve_price(&candidates).unwrap();
        assert_eq!(resolved.tier, PriceTier::DataAttribute);
        assert_eq!(resolved.price.amount(), dec!(12.50));
    }

    #[test]
    fn data_attributes_follow_fixed_order() {
        let resolver = ExtractionResolver::default();
        let candidates = vec![
            attribute("data-price-amount", "30.00"),
            attribute("data-product-price", "20.00"),
            attribute("data-sku-price", "1.00"),
        ];

        let resolved = resolver.resolve_price(&candidates).unwrap();
        assert_eq!(resolved.origin, "data-product-price");
        assert_eq!(resolved.price.amount(), dec!(20.00));
    }

    #[test]
    fn selectors_follow_fixed_order_and_ignore_case() {
        let resolver = ExtractionResolver::default();
        let candidates = vec![selector("price", "9.00"), selector(".Product-Price", "8.00")];

        let resolved = resolver.resolve_price(&candidates).unwrap();
        assert_eq!(resolved.origin, ".product-price");
        assert_eq!(resolved.price.amount(), dec!(8.00));
    }

    #[test]
    fn locale_hint_and_proxy_country_apply() {
        let resolver = ExtractionResolver::new(ResolverOptions {
            locale_hint: LocaleHint::Eu,
            proxy_country: Some("CA".to_string()),
        });
        let candidates = vec![CandidateSource::SemanticMarkup {
            price: Some("1.299,00".to_string()),
            currency: Some("$".to_string()),
        }];

        let resolved = resolver.resolve_price(&candidates).unwrap();
        assert_eq!(resolved.price.amount(), dec!(1299.00));
        assert_eq!(resolved.currency.as_str(), "CAD");
        assert_eq!(resolved.origin, "itemprop");
    }

    #[test]
    fn nothing_usable_is_no_price_found() {
        let resolver = ExtractionResolver::default();
        let err = resolver
            .resolve_price(&[attribute("data-other", "5.00"), selector(".price", "")])
            .unwrap_err();
        assert_eq!(err.code(), "NO_PRICE_FOUND");

        assert!(resolver.resolve_price(&[]).is_err());
    }
}
