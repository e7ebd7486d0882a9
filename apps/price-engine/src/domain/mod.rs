//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic (normalization, scrubbing, resolution)
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`price_extraction`]: Turning scraped text and candidate fields into a canonical price
//! - [`price_monitoring`]: Append-only price history and drop detection

pub mod price_extraction;
pub mod price_monitoring;
pub mod shared;
