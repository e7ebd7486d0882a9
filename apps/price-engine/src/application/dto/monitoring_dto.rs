//! Monitoring DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::price_monitoring::{DropSignal, NoSignalReason, PriceObservation};

/// DTO representing a stored observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationDto {
    /// Subject identifier.
    pub subject: String,
    /// Exact price text.
    pub price: String,
    /// ISO 4217 code.
    pub currency: String,
    /// RFC 3339 timestamp.
    pub observed_at: String,
}

impl From<&PriceObservation> for ObservationDto {
    fn from(observation: &PriceObservation) -> Self {
        Self {
            subject: observation.subject().to_string(),
            price: observation.price().to_canonical(),
            currency: observation.currency().to_string(),
            observed_at: observation.observed_at().to_rfc3339(),
        }
    }
}

/// DTO representing a drop check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSignalDto {
    /// `alert` or `no_signal`.
    pub signal: String,
    /// Why no alert was raised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Previous price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Current price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Previous minus current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    /// Discount, two decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<Decimal>,
    /// Currency of the alert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl From<&DropSignal> for DropSignalDto {
    fn from(signal: &DropSignal) -> Self {
        match signal {
            DropSignal::Alert(alert) => Self {
                signal: "alert".to_string(),
                reason: None,
                previous: Some(alert.previous.to_canonical()),
                current: Some(alert.current.to_canonical()),
                savings: Some(alert.savings.to_canonical()),
                discount_percent: Some(alert.discount_percent.round_dp(2)),
                currency: Some(alert.currency.to_string()),
            },
            DropSignal::NoSignal(reason) => Self {
                signal: "no_signal".to_string(),
                reason: Some(reason.as_str().to_string()),
                previous: None,
                current: None,
                savings: None,
                discount_percent: match reason {
                    NoSignalReason::BelowThreshold { discount_percent } => {
                        Some(discount_percent.round_dp(2))
                    }
                    _ => None,
                },
                currency: None,
            },
        }
    }
}
