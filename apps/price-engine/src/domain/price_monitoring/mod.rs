//! Price Monitoring Bounded Context
//!
//! Append-only price history per subject and drop detection over it.
//!
//! # Key Concepts
//!
//! - **Observation**: one resolved price for a subject at an instant
//! - **History**: a subject's observations; only ever appended to
//! - **Sentinel price**: zero or negative, a past scraping error rather than a real price
//! - **Drop signal**: an alert, or the reason no alert was raised

pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use errors::HistoryError;
pub use repository::PriceHistoryRepository;
pub use services::{DEFAULT_THRESHOLD_PERCENT, compare_prices, detect_drop, percent_drop};
pub use value_objects::{DropAlert, DropSignal, NoSignalReason, PriceObservation};
