//! Track Price Use Case

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::price_extraction::{
    CandidateSource, ExtractionError, ExtractionResolver, ResolvedPrice,
};
use crate::domain::price_monitoring::{
    DropSignal, HistoryError, PriceHistoryRepository, PriceObservation, detect_drop,
};
use crate::domain::shared::{CurrencyCode, NormalizedPrice, SubjectId, Timestamp};

/// Errors from the resolve, append, and check pipeline.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// No usable price in the candidates.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The history store failed.
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Result of tracking one subject.
#[derive(Debug, Clone)]
pub struct TrackOutcome {
    /// Winning candidate.
    pub resolved: ResolvedPrice,
    /// Observation appended to the history.
    pub observation: PriceObservation,
    /// Drop check after the append.
    pub signal: DropSignal,
}

/// Use case for recording prices and checking them for drops.
pub struct TrackPriceUseCase<R>
where
    R: PriceHistoryRepository + ?Sized,
{
    history_repo: Arc<R>,
    resolver: ExtractionResolver,
    threshold_percent: Decimal,
}

impl<R> TrackPriceUseCase<R>
where
    R: PriceHistoryRepository + ?Sized,
{
    /// Create a new `TrackPriceUseCase`.
    pub const fn new(
        history_repo: Arc<R>,
        resolver: ExtractionResolver,
        threshold_percent: Decimal,
    ) -> Self {
        Self {
            history_repo,
            resolver,
            threshold_percent,
        }
    }

    /// Threshold used by [`Self::track`].
    #[must_use]
    pub const fn threshold_percent(&self) -> Decimal {
        self.threshold_percent
    }

    /// Append an observation stamped now.
    ///
    /// # Errors
    ///
    /// Returns error if the append fails.
    pub async fn save(
        &self,
        subject: SubjectId,
        price: NormalizedPrice,
        currency: CurrencyCode,
    ) -> Result<PriceObservation, HistoryError> {
        let observation = PriceObservation::new(subject, price, currency, Timestamp::now());
        self.history_repo.append(&observation).await?;

        tracing::debug!(
            subject = %observation.subject(),
            price = %observation.price(),
            currency = %observation.currency(),
            "Observation appended"
        );

        Ok(observation)
    }

    /// Append a resolver result stamped now.
    ///
    /// # Errors
    ///
    /// Returns error if the append fails.
    pub async fn record(
        &self,
        subject: SubjectId,
        resolved: &ResolvedPrice,
    ) -> Result<PriceObservation, HistoryError> {
        self.save(subject, resolved.price, resolved.currency).await
    }

    /// Compare the two most recent observations of `subject`.
    ///
    /// # Errors
    ///
    /// Returns error only if the history cannot be read; detection itself
    /// always produces a signal.
    pub async fn check_drop(
        &self,
        subject: &SubjectId,
        threshold_percent: Decimal,
    ) -> Result<DropSignal, HistoryError> {
        let latest = self.history_repo.latest(subject, 2).await?;
        let signal = detect_drop(&latest, threshold_percent);

        match &signal {
            DropSignal::Alert(alert) => tracing::info!(
                subject = %subject,
                previous = %alert.previous,
                current = %alert.current,
                savings = %alert.savings,
                discount_percent = %alert.discount_percent.round_dp(2),
                currency = %alert.currency,
                "Price drop detected"
            ),
            DropSignal::NoSignal(reason) => tracing::debug!(
                subject = %subject,
                reason = reason.as_str(),
                "No drop signal"
            ),
        }

        Ok(signal)
    }

    /// Resolve a price from candidates, append it, and check for a drop
    /// with the configured threshold.
    ///
    /// # Errors
    ///
    /// Returns error if no price resolves or the history store fails.
    pub async fn track(
        &self,
        subject: SubjectId,
        candidates: &[CandidateSource],
    ) -> Result<TrackOutcome, TrackingError> {
        let resolved = self.resolver.resolve_price(candidates)?;
        let observation = self.record(subject, &resolved).await?;
        let signal = self
            .check_drop(observation.subject(), self.threshold_percent)
            .await?;

        Ok(TrackOutcome {
            resolved,
            observation,
            signal,
        })
    }
}
