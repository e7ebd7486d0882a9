// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Price Engine - Rust Core Library
//!
//! Resolves a canonical, currency-tagged, exact-decimal price from noisy
//! scraped text and tracks it over time to detect drops.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, services, repository ports)
//!   - `price_extraction`: Decimal normalizer, noise scrubber, currency and tier resolvers
//!   - `price_monitoring`: Observations, drop detector, `PriceHistoryRepository`
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: `TrackPrice`, `RegionalAudit`, `NormalizeVariants`
//!   - `dto`: Data transfer objects for the CLI boundary
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: Price history stores (in-memory, `DuckDB`)
//!
//! Pure extraction code never touches I/O; the history store is the only
//! shared mutable state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::price_extraction::{
    CandidateSource, ExtractionError, ExtractionResolver, LocaleHint, Offer, OfferShape,
    PriceTier, ResolvedPrice, ResolverOptions, extract_clean_price, normalize, resolve_currency,
    resolve_explicit_currency, scrub_noise,
};
pub use domain::price_monitoring::{
    DropAlert, DropSignal, HistoryError, NoSignalReason, PriceHistoryRepository,
    PriceObservation, detect_drop,
};
pub use domain::shared::{CurrencyCode, DomainError, NormalizedPrice, SubjectId, Timestamp};

// Application re-exports
pub use application::dto::{DropSignalDto, ObservationDto};
pub use application::use_cases::{
    NormalizeVariantsUseCase, NormalizedVariant, RegionalAuditUseCase, RegionalOutcome,
    RegionalQuote, RegionalResult, TrackOutcome, TrackPriceUseCase, TrackingError, VariantRow,
};

// Infrastructure re-exports
pub use infrastructure::persistence::{
    DuckDbPriceHistoryRepository, InMemoryPriceHistoryRepository,
};
