//! Price Monitoring Value Objects

mod drop_signal;
mod price_observation;

pub use drop_signal::{DropAlert, DropSignal, NoSignalReason};
pub use price_observation::PriceObservation;
