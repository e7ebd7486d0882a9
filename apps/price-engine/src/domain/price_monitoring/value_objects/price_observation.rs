//! Price observation value object.

use serde::{Deserialize, Serialize};

use crate::domain::price_extraction::ResolvedPrice;
use crate::domain::shared::{CurrencyCode, NormalizedPrice, SubjectId, Timestamp};

/// One resolved price for a subject at an instant. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    subject: SubjectId,
    price: NormalizedPrice,
    currency: CurrencyCode,
    observed_at: Timestamp,
}

impl PriceObservation {
    /// Create an observation.
    #[must_use]
    pub const fn new(
        subject: SubjectId,
        price: NormalizedPrice,
        currency: CurrencyCode,
        observed_at: Timestamp,
    ) -> Self {
        Self {
            subject,
            price,
            currency,
            observed_at,
        }
    }

    /// Observation of a resolver result.
    #[must_use]
    pub const fn from_resolved(
        subject: SubjectId,
        resolved: &ResolvedPrice,
        observed_at: Timestamp,
    ) -> Self {
        Self::new(subject, resolved.price, resolved.currency, observed_at)
    }

    /// Get the subject.
    #[must_use]
    pub const fn subject(&self) -> &SubjectId {
        &self.subject
    }

    /// Get the price.
    #[must_use]
    pub const fn price(&self) -> NormalizedPrice {
        self.price
    }

    /// Get the currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Get the observation time.
    #[must_use]
    pub const fn observed_at(&self) -> Timestamp {
        self.observed_at
    }
}
