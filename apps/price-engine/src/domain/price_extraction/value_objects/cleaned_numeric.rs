//! Cleaned numeric string value object.

use std::fmt;

use super::LocaleHint;
use crate::domain::shared::NumberFormat;

/// Digits, commas, and periods from a raw string, in their original order.
///
/// Never empty: construction fails when nothing numeric survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedNumeric(String);

impl CleanedNumeric {
    /// Strip everything except ASCII digits, `,` and `.`.
    ///
    /// Space-separated groupings collapse (`"1 200.00"` becomes `"1200.00"`).
    /// Returns `None` if nothing remains.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
            .collect();
        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned))
        }
    }

    /// Get the cleaned text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pick the separator convention for a hint.
    ///
    /// Explicit hints win. For [`LocaleHint::Auto`]:
    /// - both separators: the rightmost one is the decimal point;
    /// - only commas: exactly two digits after the last comma means EU cents;
    /// - otherwise US.
    #[must_use]
    pub fn resolve_format(&self, hint: LocaleHint) -> NumberFormat {
        if let Some(format) = hint.explicit_format() {
            return format;
        }

        let last_comma = self.0.rfind(',');
        let last_period = self.0.rfind('.');

        match (last_comma, last_period) {
            (Some(comma), Some(period)) => {
                if comma > period {
                    NumberFormat::Eu
                } else {
                    NumberFormat::Us
                }
            }
            (Some(comma), None) => {
                let trailing_digits = self.0.len() - comma - 1;
                if trailing_digits == 2 {
                    NumberFormat::Eu
                } else {
                    NumberFormat::Us
                }
            }
            _ => NumberFormat::Us,
        }
    }

    /// Drop group separators and turn the decimal separator into `.`.
    #[must_use]
    pub fn to_decimal_text(&self, format: NumberFormat) -> String {
        match format {
            NumberFormat::Eu => self.0.replace('.', "").replace(',', "."),
            NumberFormat::Us => self.0.replace(',', ""),
        }
    }
}

impl fmt::Display for CleanedNumeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
