//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod normalize_variants;
mod regional_audit;
mod track_price;

pub use normalize_variants::{NormalizeVariantsUseCase, NormalizedVariant, VariantRow};
pub use regional_audit::{RegionalAuditUseCase, RegionalOutcome, RegionalQuote, RegionalResult};
pub use track_price::{TrackOutcome, TrackPriceUseCase, TrackingError};
