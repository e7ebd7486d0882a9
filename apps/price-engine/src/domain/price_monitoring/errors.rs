//! Price history errors.

use thiserror::Error;

/// Errors raised by price history stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The backing store failed.
    #[error("History storage error: {message}")]
    Storage {
        /// Error message.
        message: String,
    },

    /// A stored row could not be turned back into an observation.
    #[error("Corrupted history row for {subject}: {message}")]
    Corrupted {
        /// Subject the row belongs to.
        subject: String,
        /// What was wrong with it.
        message: String,
    },

    /// A writer panicked while holding the store lock.
    #[error("History lock poisoned")]
    LockPoisoned,
}

impl HistoryError {
    /// Shorthand for [`HistoryError::Storage`].
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
