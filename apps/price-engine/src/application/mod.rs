//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Use Cases**: tracking, regional audits, variant normalization
//! - **DTOs**: Data transfer objects for the command-line boundary

pub mod dto;
pub mod use_cases;

pub use dto::*;
pub use use_cases::*;
