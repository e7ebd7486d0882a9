//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain layer:
//!
//! - `persistence/`: price history stores (in-memory, DuckDB)

pub mod persistence;
