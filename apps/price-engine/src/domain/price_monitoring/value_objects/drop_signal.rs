//! Drop detection outcomes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{CurrencyCode, NormalizedPrice};

/// A significant price decrease. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropAlert {
    /// Second most recent price.
    pub previous: NormalizedPrice,
    /// Most recent price.
    pub current: NormalizedPrice,
    /// `previous - current`.
    pub savings: NormalizedPrice,
    /// `savings / previous * 100`, unrounded.
    pub discount_percent: Decimal,
    /// Currency of the current observation.
    pub currency: CurrencyCode,
}

/// Why no alert was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSignalReason {
    /// Fewer than two observations.
    InsufficientHistory,
    /// One of the two prices is zero or negative.
    SentinelPrice,
    /// The price rose or stayed the same.
    NoDecrease,
    /// The price fell, but by less than the threshold.
    BelowThreshold {
        /// Actual discount.
        discount_percent: Decimal,
    },
}

impl NoSignalReason {
    /// Stable snake-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientHistory => "insufficient_history",
            Self::SentinelPrice => "sentinel_price",
            Self::NoDecrease => "no_decrease",
            Self::BelowThreshold { .. } => "below_threshold",
        }
    }
}

impl fmt::Display for NoSignalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking the latest two observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropSignal {
    /// Significant drop.
    Alert(DropAlert),
    /// No alert, with the reason.
    NoSignal(NoSignalReason),
}

impl DropSignal {
    /// Returns true for [`DropSignal::Alert`].
    #[must_use]
    pub const fn is_alert(&self) -> bool {
        matches!(self, Self::Alert(_))
    }

    /// The alert, if any.
    #[must_use]
    pub const fn alert(&self) -> Option<&DropAlert> {
        match self {
            Self::Alert(alert) => Some(alert),
            Self::NoSignal(_) => None,
        }
    }

    /// The no-signal reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<&NoSignalReason> {
        match self {
            Self::Alert(_) => None,
            Self::NoSignal(reason) => Some(reason),
        }
    }
}
