//! Price History Repository Trait
//!
//! Defines the persistence abstraction for price observations.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::errors::HistoryError;
use super::value_objects::PriceObservation;
use crate::domain::shared::SubjectId;

/// Repository trait for the append-only price history.
///
/// There is no update or delete: the history is an audit log.
#[async_trait]
pub trait PriceHistoryRepository: Send + Sync {
    /// Append an observation.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn append(&self, observation: &PriceObservation) -> Result<(), HistoryError>;

    /// The `limit` most recent observations for a subject, newest first.
    ///
    /// Ties on timestamp are broken by insertion order, later first. The
    /// result is read under one consistent view, so a concurrent append is
    /// either fully visible or not at all.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails or a stored row is corrupt.
    async fn latest(
        &self,
        subject: &SubjectId,
        limit: usize,
    ) -> Result<Vec<PriceObservation>, HistoryError>;

    /// Every observation for a subject, oldest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails or a stored row is corrupt.
    async fn history(&self, subject: &SubjectId) -> Result<Vec<PriceObservation>, HistoryError>;
}
