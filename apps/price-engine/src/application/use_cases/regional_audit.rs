//! Regional Audit Use Case
//!
//! Normalizes the same product's price as seen from several countries.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::price_extraction::{ExtractionError, LocaleHint, normalize, resolve_currency};
use crate::domain::shared::{CurrencyCode, NormalizedPrice};

/// Raw price text seen through a proxy in one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalQuote {
    /// ISO 3166-1 alpha-2 region of the proxy.
    pub region: String,
    /// Price text as displayed, if any was extracted.
    #[serde(default)]
    pub raw_price: Option<String>,
}

/// Per-region outcome. A failure occupies its slot instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RegionalOutcome {
    /// Normalized price and currency.
    Resolved {
        /// Exact price.
        price: NormalizedPrice,
        /// Currency resolved with the region as context.
        currency: CurrencyCode,
    },
    /// The quote could not be normalized.
    Failed {
        /// Stable error code.
        code: String,
        /// Error message.
        message: String,
    },
}

/// One row of the audit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalResult {
    /// Region of the quote.
    pub region: String,
    /// Outcome for that region.
    #[serde(flatten)]
    pub outcome: RegionalOutcome,
}

/// Use case for auditing prices across regions.
#[derive(Debug, Clone, Default)]
pub struct RegionalAuditUseCase {
    locale_hint: LocaleHint,
}

impl RegionalAuditUseCase {
    /// Create a new `RegionalAuditUseCase`.
    #[must_use]
    pub const fn new(locale_hint: LocaleHint) -> Self {
        Self { locale_hint }
    }

    /// Audit every quote in parallel. Results keep the input order.
    #[must_use]
    pub fn audit(&self, quotes: &[RegionalQuote]) -> Vec<RegionalResult> {
        let results: Vec<RegionalResult> = quotes
            .par_iter()
            .map(|quote| RegionalResult {
                region: quote.region.trim().to_uppercase(),
                outcome: self.audit_one(quote),
            })
            .collect();

        let failed = results
            .iter()
            .filter(|r| matches!(r.outcome, RegionalOutcome::Failed { .. }))
            .count();
        tracing::info!(regions = results.len(), failed, "Regional audit complete");

        results
    }

    fn audit_one(&self, quote: &RegionalQuote) -> RegionalOutcome {
        let result = quote
            .raw_price
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| {
                ExtractionError::no_price_found(format!("no price for {}", quote.region))
            })
            .and_then(|raw| {
                normalize(raw, self.locale_hint).map(|price| RegionalOutcome::Resolved {
                    price,
                    currency: resolve_currency(raw, Some(&quote.region)),
                })
            });

        result.unwrap_or_else(|e| {
            tracing::warn!(
                region = %quote.region,
                code = e.code(),
                error = %e,
                "Region failed"
            );
            RegionalOutcome::Failed {
                code: e.code().to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(region: &str, raw: Option<&str>) -> RegionalQuote {
        RegionalQuote {
            region: region.to_string(),
            raw_price: raw.map(str::to_string),
        }
    }

    #[test]
    fn audit_keeps_going_past_failures() {
        let quotes = vec![
            quote("US", Some("$24.69")),
            quote("DE", Some("EUR 17.56")),
            quote("XX", None),
            quote("IN", Some("INR 1,848.03")),
            quote("FR", Some("Prix indisponible")),
            quote("CA", Some("$31.99")),
        ];

        let results = RegionalAuditUseCase::default().audit(&quotes);

        assert_eq!(results.len(), 6);
        let regions: Vec<&str> = results.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["US", "DE", "XX", "IN", "FR", "CA"]);

        assert_eq!(
            results[1].outcome,
            RegionalOutcome::Resolved {
                price: NormalizedPrice::new(dec!(17.56)),
                currency: CurrencyCode::parse("EUR").unwrap(),
            }
        );
        assert!(matches!(
            &results[2].outcome,
            RegionalOutcome::Failed { code, .. } if code == "NO_PRICE_FOUND"
        ));
        assert!(matches!(
            &results[4].outcome,
            RegionalOutcome::Failed { code, .. } if code == "NO_NUMERIC_DATA"
        ));
        match &results[5].outcome {
            RegionalOutcome::Resolved { currency, .. } => assert_eq!(currency.as_str(), "CAD"),
            other => panic!("expected resolved, got {other:?}"),
        }
    }

    #[test]
    fn result_serializes_flat() {
        let result = RegionalResult {
            region: "BR".to_string(),
            outcome: RegionalOutcome::Failed {
                code: "NO_PRICE_FOUND".to_string(),
                message: "missing".to_string(),
            },
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["region"], "BR");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["code"], "NO_PRICE_FOUND");
    }
}
