//! DuckDB price history repository.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use duckdb::{Connection, ToSql};

use crate::domain::price_monitoring::{HistoryError, PriceHistoryRepository, PriceObservation};
use crate::domain::shared::{CurrencyCode, NormalizedPrice, SubjectId, Timestamp};

/// Schema statements, applied in order on open.
const MIGRATIONS: [&str; 3] = [
    "CREATE SEQUENCE IF NOT EXISTS price_history_id_seq",
    "CREATE TABLE IF NOT EXISTS price_history (
        id BIGINT PRIMARY KEY DEFAULT nextval('price_history_id_seq'),
        subject VARCHAR NOT NULL,
        price VARCHAR NOT NULL,
        currency VARCHAR NOT NULL,
        observed_at_us BIGINT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS price_history_subject_time
        ON price_history (subject, observed_at_us)",
];

/// DuckDB implementation of `PriceHistoryRepository`.
///
/// Prices are stored as exact decimal text and timestamps as Unix
/// microseconds. The table is insert-only; `id` breaks timestamp ties.
pub struct DuckDbPriceHistoryRepository {
    connection: Mutex<Connection>,
}

impl std::fmt::Debug for DuckDbPriceHistoryRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuckDbPriceHistoryRepository")
            .finish_non_exhaustive()
    }
}

fn storage(error: duckdb::Error) -> HistoryError {
    HistoryError::storage(error.to_string())
}

impl DuckDbPriceHistoryRepository {
    /// Open (or create) a database file and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns error if the file or its parent directory cannot be created,
    /// or the schema cannot be applied.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                HistoryError::storage(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        let connection = Connection::open(path).map_err(storage)?;
        tracing::info!(path = %path.display(), "Opened DuckDB price history");
        Self::with_connection(connection)
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns error if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self, HistoryError> {
        Self::with_connection(Connection::open_in_memory().map_err(storage)?)
    }

    fn with_connection(connection: Connection) -> Result<Self, HistoryError> {
        for statement in MIGRATIONS {
            connection.execute_batch(statement).map_err(storage)?;
        }
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn query_subject(
        &self,
        subject: &SubjectId,
        order: &str,
        limit: Option<usize>,
    ) -> Result<Vec<PriceObservation>, HistoryError> {
        let limit_clause = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
        let sql = format!(
            "SELECT price, currency, observed_at_us FROM price_history \
             WHERE subject = ? ORDER BY observed_at_us {order}, id {order}{limit_clause}"
        );

        let connection = self
            .connection
            .lock()
            .map_err(|_| HistoryError::LockPoisoned)?;

        let subject_text = subject.as_str().to_string();
        let params: [&dyn ToSql; 1] = [&subject_text];

        let mut statement = connection.prepare(&sql).map_err(storage)?;
        let mut rows = statement.query(params.as_slice()).map_err(storage)?;

        let mut observations = Vec::new();
        while let Some(row) = rows.next().map_err(storage)? {
            let price: String = row.get(0).map_err(storage)?;
            let currency: String = row.get(1).map_err(storage)?;
            let observed_at_us: i64 = row.get(2).map_err(storage)?;
            observations.push(decode_row(subject, &price, &currency, observed_at_us)?);
        }

        Ok(observations)
    }
}

fn decode_row(
    subject: &SubjectId,
    price: &str,
    currency: &str,
    observed_at_us: i64,
) -> Result<PriceObservation, HistoryError> {
    let corrupted = |message: String| {
        tracing::warn!(subject = %subject, %message, "Corrupted price history row");
        HistoryError::Corrupted {
            subject: subject.to_string(),
            message,
        }
    };

    let price = NormalizedPrice::from_canonical(price).map_err(|e| corrupted(e.to_string()))?;
    let currency = CurrencyCode::parse(currency).map_err(|e| corrupted(e.to_string()))?;
    let observed_at = Timestamp::from_unix_micros(observed_at_us)
        .ok_or_else(|| corrupted(format!("timestamp {observed_at_us} out of range")))?;

    Ok(PriceObservation::new(
        subject.clone(),
        price,
        currency,
        observed_at,
    ))
}

#[async_trait]
impl PriceHistoryRepository for DuckDbPriceHistoryRepository {
    async fn append(&self, observation: &PriceObservation) -> Result<(), HistoryError> {
        let subject = observation.subject().as_str().to_string();
        let price = observation.price().to_canonical();
        let currency = observation.currency().to_string();
        let observed_at_us = observation.observed_at().unix_micros();
        let params: [&dyn ToSql; 4] = [&subject, &price, &currency, &observed_at_us];

        let connection = self
            .connection
            .lock()
            .map_err(|_| HistoryError::LockPoisoned)?;
        connection
            .execute(
                "INSERT INTO price_history (subject, price, currency, observed_at_us) \
                 VALUES (?, ?, ?, ?)",
                params.as_slice(),
            )
            .map_err(storage)?;
        Ok(())
    }

    async fn latest(
        &self,
        subject: &SubjectId,
        limit: usize,
    ) -> Result<Vec<PriceObservation>, HistoryError> {
        self.query_subject(subject, "DESC", Some(limit))
    }

    async fn history(&self, subject: &SubjectId) -> Result<Vec<PriceObservation>, HistoryError> {
        self.query_subject(subject, "ASC", None)
    }
}
