//! Decimal Normalizer
//!
//! Locale-ambiguous numeric text to an exact [`NormalizedPrice`].

use rust_decimal::Decimal;

use crate::domain::price_extraction::errors::ExtractionError;
use crate::domain::price_extraction::value_objects::{CleanedNumeric, LocaleHint};
use crate::domain::shared::NormalizedPrice;

/// Normalize raw numeric text into an exact decimal.
///
/// Currency symbols, letters, and whitespace are discarded first, so
/// `"€ 1.234,56"` and `"1 234,56 EUR"` are treated alike. The separator
/// convention comes from `hint`, or from the shape of the number under
/// [`LocaleHint::Auto`].
///
/// # Errors
///
/// - [`ExtractionError::NoNumericData`] if no digit or separator survives.
/// - [`ExtractionError::InvalidNumericFormat`] if the text still has more
///   than one decimal point after separator handling, or is not an exact
///   decimal (e.g. more digits than fit without rounding).
pub fn normalize(raw: &str, hint: LocaleHint) -> Result<NormalizedPrice, ExtractionError> {
    let cleaned = CleanedNumeric::from_raw(raw).ok_or_else(|| ExtractionError::NoNumericData {
        raw: raw.to_string(),
    })?;

    let format = cleaned.resolve_format(hint);
    let text = cleaned.to_decimal_text(format);

    let invalid = || ExtractionError::InvalidNumericFormat {
        raw: raw.to_string(),
        normalized: text.clone(),
    };

    if text.matches('.').count() > 1 || !text.bytes().any(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let amount = Decimal::from_str_exact(&text).map_err(|_| invalid())?;

    tracing::trace!(raw, format = format.as_str(), %amount, "Normalized price");

    Ok(NormalizedPrice::new(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::NumberFormat;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case("$1,234.56", LocaleHint::Us, dec!(1234.56) ; "us grouped with symbol")]
    #[test_case("€ 1.234,56", LocaleHint::Eu, dec!(1234.56) ; "eu grouped with symbol")]
    #[test_case("1,200", LocaleHint::Us, dec!(1200) ; "us comma group")]
    #[test_case("1,20", LocaleHint::Auto, dec!(1.20) ; "auto two trailing digits is eu")]
    #[test_case("1,234", LocaleHint::Auto, dec!(1234) ; "auto three trailing digits is us")]
    #[test_case("1 200.00", LocaleHint::Auto, dec!(1200.00) ; "space grouping collapses")]
    #[test_case("1.234.567,89", LocaleHint::Eu, dec!(1234567.89) ; "eu multi group")]
    #[test_case("1,234,567.89", LocaleHint::Auto, dec!(1234567.89) ; "us multi group")]
    #[test_case("CHF 49.90", LocaleHint::Auto, dec!(49.90) ; "letters stripped")]
    fn normalize_valid(raw: &str, hint: LocaleHint, expected: Decimal) {
        let price = normalize(raw, hint).unwrap();
        assert_eq!(price.amount(), expected);
    }

    #[test]
    fn normalize_keeps_scale() {
        let price = normalize("1,20", LocaleHint::Auto).unwrap();
        assert_eq!(price.scale(), 2);
        assert_eq!(price.to_canonical(), "1.20");
    }

    #[test]
    fn normalize_no_numeric_data() {
        let err = normalize("Call for price", LocaleHint::Auto).unwrap_err();
        assert_eq!(err.code(), "NO_NUMERIC_DATA");
        assert!(matches!(
            normalize("", LocaleHint::Us),
            Err(ExtractionError::NoNumericData { .. })
        ));
    }

    #[test_case("1,234,56", LocaleHint::Eu ; "eu malformed grouping")]
    #[test_case("1.234.567", LocaleHint::Us ; "us periods as groups")]
    #[test_case("1.234.567", LocaleHint::Auto ; "auto periods only")]
    #[test_case(",", LocaleHint::Auto ; "separator only")]
    #[test_case("99999999999999999999999999999999", LocaleHint::Us ; "mantissa overflow")]
    fn normalize_invalid_format(raw: &str, hint: LocaleHint) {
        let err = normalize(raw, hint).unwrap_err();
        assert!(
            matches!(err, ExtractionError::InvalidNumericFormat { .. }),
            "{raw} -> {err:?}"
        );
    }

    #[test]
    fn normalize_error_reports_normalized_text() {
        let err = normalize("1,234,56", LocaleHint::Eu).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::InvalidNumericFormat {
                raw: "1,234,56".to_string(),
                normalized: "1.234.56".to_string(),
            }
        );
    }

    proptest! {
        #[test]
        fn last_separator_decides(
            whole in 1u32..1000,
            group in 0u32..1000,
            cents in 0u32..100,
            comma_last in any::<bool>(),
        ) {
            let (group_sep, decimal_sep) = if comma_last { ('.', ',') } else { (',', '.') };
            let raw = format!("{whole}{group_sep}{group:03}{decimal_sep}{cents:02}");
            let expected = Decimal::from_str_exact(&format!("{whole}{group:03}.{cents:02}")).unwrap();

            let price = normalize(&raw, LocaleHint::Auto).unwrap();
            prop_assert_eq!(price.amount(), expected);
        }

        #[test]
        fn render_then_normalize_is_identity(
            mantissa in 1i64..1_000_000_000,
            scale in 0u32..4,
            eu in any::<bool>(),
        ) {
            let price = NormalizedPrice::new(Decimal::new(mantissa, scale));
            let (format, hint) = if eu {
                (NumberFormat::Eu, LocaleHint::Eu)
            } else {
                (NumberFormat::Us, LocaleHint::Us)
            };

            let again = normalize(&price.render(format), hint).unwrap();
            prop_assert_eq!(again, price);
            prop_assert_eq!(again.scale(), price.scale());
        }
    }
}
