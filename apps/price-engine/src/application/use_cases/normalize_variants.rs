//! Normalize Variants Use Case
//!
//! Canonicalizes per-variant price rows produced by an AI extraction service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::price_extraction::{
    ResolverOptions, normalize, resolve_currency, resolve_explicit_currency,
};
use crate::domain::price_monitoring::percent_drop;
use crate::domain::shared::{CurrencyCode, NormalizedPrice};

/// A raw variant row as extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRow {
    /// Variant label.
    #[serde(default, alias = "product_variant")]
    pub variant: Option<String>,
    /// Selling price text, usually with a symbol.
    #[serde(default)]
    pub current_price: Option<String>,
    /// Pre-discount price text.
    #[serde(default)]
    pub original_price: Option<String>,
    /// Currency field, ideally an ISO code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Stock status text.
    #[serde(default)]
    pub availability: Option<String>,
}

/// A variant row with exact prices and a resolved currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedVariant {
    /// Variant label.
    pub variant: Option<String>,
    /// Selling price.
    pub current_price: Option<NormalizedPrice>,
    /// Pre-discount price.
    pub original_price: Option<NormalizedPrice>,
    /// Resolved currency.
    pub currency: CurrencyCode,
    /// Stock status text.
    pub availability: Option<String>,
    /// Advertised markdown, two decimal places. Only set when
    /// `original > current > 0`.
    pub markdown_percent: Option<Decimal>,
}

/// Use case for normalizing variant rows.
#[derive(Debug, Clone, Default)]
pub struct NormalizeVariantsUseCase {
    options: ResolverOptions,
}

impl NormalizeVariantsUseCase {
    /// Create a new `NormalizeVariantsUseCase`.
    #[must_use]
    pub const fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// Normalize every row. A bad price field becomes `None`; rows are never dropped.
    #[must_use]
    pub fn normalize(&self, rows: &[VariantRow]) -> Vec<NormalizedVariant> {
        rows.iter().map(|row| self.normalize_row(row)).collect()
    }

    fn normalize_row(&self, row: &VariantRow) -> NormalizedVariant {
        let current_price = self.price_field(row, "current_price", row.current_price.as_deref());
        let original_price = self.price_field(row, "original_price", row.original_price.as_deref());

        let proxy_country = self.options.proxy_country.as_deref();
        let has_currency_field = row.currency.as_deref().is_some_and(|c| !c.trim().is_empty());
        let currency = if has_currency_field {
            resolve_explicit_currency(row.currency.as_deref(), proxy_country)
        } else {
            row.current_price
                .as_deref()
                .map_or(CurrencyCode::USD, |text| resolve_currency(text, proxy_country))
        };

        let markdown_percent = match (original_price, current_price) {
            (Some(original), Some(current)) if current.is_positive() && original > current => {
                percent_drop(original.amount(), current.amount()).map(|p| p.round_dp(2))
            }
            _ => None,
        };

        NormalizedVariant {
            variant: row.variant.clone(),
            current_price,
            original_price,
            currency,
            availability: row.availability.clone(),
            markdown_percent,
        }
    }

    fn price_field(
        &self,
        row: &VariantRow,
        field: &str,
        raw: Option<&str>,
    ) -> Option<NormalizedPrice> {
        let raw = raw.map(str::trim).filter(|r| !r.is_empty())?;
        match normalize(raw, self.options.locale_hint) {
            Ok(price) => Some(price),
            Err(e) => {
                tracing::warn!(
                    variant = row.variant.as_deref().unwrap_or(""),
                    field,
                    raw,
                    code = e.code(),
                    "Dropping unparseable variant price"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(current: Option<&str>, original: Option<&str>, currency: Option<&str>) -> VariantRow {
        VariantRow {
            variant: Some("Iso-Chill Cap / Black".to_string()),
            current_price: current.map(str::to_string),
            original_price: original.map(str::to_string),
            currency: currency.map(str::to_string),
            availability: Some("In Stock".to_string()),
        }
    }

    #[test]
    fn markdown_from_original_price() {
        let rows = [row(Some("$19.99"), Some("$25.00"), Some("USD"))];
        let variants = NormalizeVariantsUseCase::default().normalize(&rows);

        let v = &variants[0];
        assert_eq!(v.current_price.map(|p| p.amount()), Some(dec!(19.99)));
        assert_eq!(v.original_price.map(|p| p.amount()), Some(dec!(25.00)));
        assert_eq!(v.markdown_percent, Some(dec!(20.04)));
        assert_eq!(v.availability.as_deref(), Some("In Stock"));
    }

    #[test]
    fn no_markdown_without_discount() {
        let rows = [
            row(Some("$25.00"), Some("$25.00"), None),
            row(Some("$0.00"), Some("$25.00"), None),
            row(Some("$19.99"), None, None),
        ];
        let variants = NormalizeVariantsUseCase::default().normalize(&rows);
        assert!(variants.iter().all(|v| v.markdown_percent.is_none()));
    }

    #[test]
    fn bad_price_field_becomes_none() {
        let rows = [row(Some("See options"), Some("$30.00"), None)];
        let variants = NormalizeVariantsUseCase::default().normalize(&rows);

        assert_eq!(variants.len(), 1);
        assert!(variants[0].current_price.is_none());
        assert!(variants[0].original_price.is_some());
    }

    #[test]
    fn currency_falls_back_to_price_text() {
        let use_case = NormalizeVariantsUseCase::new(ResolverOptions {
            proxy_country: Some("AU".to_string()),
            ..ResolverOptions::default()
        });
        let rows = [
            row(Some("$19.99"), None, None),
            row(Some("£12.00"), None, Some("  ")),
            row(Some("19.99"), None, Some("eur")),
        ];
        let variants = use_case.normalize(&rows);

        let codes: Vec<&str> = variants.iter().map(|v| v.currency.as_str()).collect();
        assert_eq!(codes, vec!["AUD", "GBP", "EUR"]);
    }

    #[test]
    fn row_accepts_extraction_field_names() {
        let row: VariantRow = serde_json::from_str(
            r#"{"product_variant":"Large","current_price":"$5","availability":"Out of Stock"}"#,
        )
        .unwrap();
        assert_eq!(row.variant.as_deref(), Some("Large"));
        assert!(row.original_price.is_none());
    }
}
