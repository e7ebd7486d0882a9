//! Price Monitoring Domain Services

mod drop_detector;

pub use drop_detector::{DEFAULT_THRESHOLD_PERCENT, compare_prices, detect_drop, percent_drop};
