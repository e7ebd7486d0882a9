//! Price Extraction Value Objects

mod candidate_source;
mod cleaned_numeric;
mod locale_hint;
mod resolved_price;

pub use candidate_source::{CandidateSource, Offer, OfferShape};
pub use cleaned_numeric::CleanedNumeric;
pub use locale_hint::LocaleHint;
pub use resolved_price::{PriceTier, ResolvedPrice};
