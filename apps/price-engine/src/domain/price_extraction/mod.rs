//! Price Extraction Bounded Context
//!
//! Turns raw scraped text and candidate fields into a canonical
//! `(NormalizedPrice, CurrencyCode)` pair. Everything here is pure and
//! synchronous; the static tables are built once and never mutated.

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::ExtractionError;
pub use services::{
    ExtractionResolver, ResolverOptions, extract_clean_price, normalize, resolve_currency,
    resolve_explicit_currency, scrub_noise,
};
pub use value_objects::{
    CandidateSource, CleanedNumeric, LocaleHint, Offer, OfferShape, PriceTier, ResolvedPrice,
};
