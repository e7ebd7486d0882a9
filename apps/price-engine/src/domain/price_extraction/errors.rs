//! Price extraction errors.

use thiserror::Error;

/// Errors from normalization, scrubbing, and candidate resolution.
///
/// Callers match on the variant; [`ExtractionError::code`] gives a stable
/// marker for batch reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// Nothing was left after stripping non-numeric characters.
    #[error("No numeric data found in: {raw:?}")]
    NoNumericData {
        /// The raw input.
        raw: String,
    },

    /// Locale normalization left text that is not an exact decimal.
    #[error("Normalization failed: {raw:?} -> {normalized:?}")]
    InvalidNumericFormat {
        /// The raw input.
        raw: String,
        /// The text after separator normalization.
        normalized: String,
    },

    /// Every strategy or tier was exhausted without a usable price.
    #[error("No valid price found: {context}")]
    NoPriceFound {
        /// What was searched.
        context: String,
    },
}

impl ExtractionError {
    /// Stable, machine-readable error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoNumericData { .. } => "NO_NUMERIC_DATA",
            Self::InvalidNumericFormat { .. } => "INVALID_NUMERIC_FORMAT",
            Self::NoPriceFound { .. } => "NO_PRICE_FOUND",
        }
    }

    /// Shorthand for [`ExtractionError::NoPriceFound`].
    pub fn no_price_found(context: impl Into<String>) -> Self {
        Self::NoPriceFound {
            context: context.into(),
        }
    }
}
