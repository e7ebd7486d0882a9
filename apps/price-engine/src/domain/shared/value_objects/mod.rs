//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod currency_code;
mod normalized_price;
mod subject_id;
mod timestamp;

pub use currency_code::CurrencyCode;
pub use normalized_price::{NormalizedPrice, NumberFormat};
pub use subject_id::SubjectId;
pub use timestamp::Timestamp;
