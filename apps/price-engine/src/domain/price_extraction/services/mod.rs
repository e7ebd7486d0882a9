//! Price Extraction Domain Services
//!
//! Pure functions over text and candidate fields.

mod currency_resolver;
mod decimal_normalizer;
mod extraction_resolver;
mod noise_scrubber;

pub use currency_resolver::{resolve_currency, resolve_explicit_currency};
pub use decimal_normalizer::normalize;
pub use extraction_resolver::{ExtractionResolver, ResolverOptions};
pub use noise_scrubber::{extract_clean_price, scrub_noise};
