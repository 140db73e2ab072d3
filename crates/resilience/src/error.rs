//! Error types for the revive-resilience crate.

use revive_calendar::CalendarError;

/// Error type for all fallible operations in the revive-resilience crate.
#[derive(Debug, thiserror::Error)]
pub enum ResilienceError {
    /// Returned when a record timestamp is not a representable UTC instant.
    #[error("invalid timestamp {timestamp_ms} ms for zone '{zone}'")]
    InvalidTimestamp {
        /// The raw millisecond timestamp.
        timestamp_ms: i64,
        /// Zone of the offending record.
        zone: String,
    },

    /// Returned when a record value is NaN or infinite.
    #[error("non-finite value for zone '{zone}' at {timestamp_ms} ms")]
    NonFinite {
        /// Zone of the offending record.
        zone: String,
        /// Timestamp of the offending record.
        timestamp_ms: i64,
    },

    /// Returned when a threshold configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the result source fails to deliver records.
    #[error("failed to read '{variable}' from simulation results")]
    Reader {
        /// Output variable that was requested.
        variable: String,
        /// Underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Returned when serialising a summary fails.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },

    /// Wrapped calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
