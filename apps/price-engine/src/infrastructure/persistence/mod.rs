//! Persistence Adapters
//!
//! Implementations of [`PriceHistoryRepository`](crate::domain::price_monitoring::PriceHistoryRepository).

pub mod duckdb_history;
pub mod in_memory;

pub use duckdb_history::DuckDbPriceHistoryRepository;
pub use in_memory::InMemoryPriceHistoryRepository;
