//! Price monitoring configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::price_monitoring::DEFAULT_THRESHOLD_PERCENT;

/// Drop detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Minimum drop, in percent, that raises an alert.
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: Decimal,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            threshold_percent: default_threshold_percent(),
        }
    }
}

const fn default_threshold_percent() -> Decimal {
    DEFAULT_THRESHOLD_PERCENT
}
