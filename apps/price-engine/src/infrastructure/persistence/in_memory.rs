//! In-memory price history repository.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::price_monitoring::{HistoryError, PriceHistoryRepository, PriceObservation};
use crate::domain::shared::SubjectId;

#[derive(Debug, Default)]
struct Inner {
    next_seq: u64,
    by_subject: HashMap<SubjectId, Vec<(u64, PriceObservation)>>,
}

/// In-memory implementation of `PriceHistoryRepository`.
///
/// Every observation carries an insertion sequence number used to order
/// observations that share a timestamp. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryPriceHistoryRepository {
    inner: RwLock<Inner>,
}

impl InMemoryPriceHistoryRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of observations across all subjects.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn len(&self) -> Result<usize, HistoryError> {
        let inner = self.inner.read().map_err(|_| HistoryError::LockPoisoned)?;
        Ok(inner.by_subject.values().map(Vec::len).sum())
    }

    /// Check if the repository is empty.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, HistoryError> {
        self.len().map(|n| n == 0)
    }

    fn sorted_for(
        &self,
        subject: &SubjectId,
        newest_first: bool,
    ) -> Result<Vec<PriceObservation>, HistoryError> {
        let inner = self.inner.read().map_err(|_| HistoryError::LockPoisoned)?;
        let mut rows = inner.by_subject.get(subject).cloned().unwrap_or_default();
        drop(inner);

        if newest_first {
            rows.sort_by_key(|(seq, o)| Reverse((o.observed_at(), *seq)));
        } else {
            rows.sort_by_key(|(seq, o)| (o.observed_at(), *seq));
        }
        Ok(rows.into_iter().map(|(_, o)| o).collect())
    }
}

#[async_trait]
impl PriceHistoryRepository for InMemoryPriceHistoryRepository {
    async fn append(&self, observation: &PriceObservation) -> Result<(), HistoryError> {
        let mut inner = self.inner.write().map_err(|_| HistoryError::LockPoisoned)?;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner
            .by_subject
            .entry(observation.subject().clone())
            .or_default()
            .push((seq, observation.clone()));
        Ok(())
    }

    async fn latest(
        &self,
        subject: &SubjectId,
        limit: usize,
    ) -> Result<Vec<PriceObservation>, HistoryError> {
        let mut rows = self.sorted_for(subject, true)?;
        rows.truncate(limit);
        Ok(rows)
    }

    async fn history(&self, subject: &SubjectId) -> Result<Vec<PriceObservation>, HistoryError> {
        self.sorted_for(subject, false)
    }
}
