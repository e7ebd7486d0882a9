//! Locale hint for separator interpretation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::{DomainError, NumberFormat};

/// Caller-supplied assumption about which separator is the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum LocaleHint {
    /// Comma groups, period decimal.
    Us,
    /// Period groups, comma decimal.
    Eu,
    /// Decide from the shape of the number.
    #[default]
    Auto,
}

impl LocaleHint {
    /// The fixed format for explicit hints; `None` for [`LocaleHint::Auto`].
    #[must_use]
    pub const fn explicit_format(self) -> Option<NumberFormat> {
        match self {
            Self::Us => Some(NumberFormat::Us),
            Self::Eu => Some(NumberFormat::Eu),
            Self::Auto => None,
        }
    }

    /// Get the hint name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Eu => "EU",
            Self::Auto => "AUTO",
        }
    }
}

impl fmt::Display for LocaleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleHint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "US" => Ok(Self::Us),
            "EU" => Ok(Self::Eu),
            "AUTO" => Ok(Self::Auto),
            other => Err(DomainError::invalid_value(
                "locale_hint",
                format!("'{other}' is not one of US, EU, AUTO"),
            )),
        }
    }
}

impl TryFrom<String> for LocaleHint {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NumberFormat> for LocaleHint {
    fn from(format: NumberFormat) -> Self {
        match format {
            NumberFormat::Us => Self::Us,
            NumberFormat::Eu => Self::Eu,
        }
    }
}
