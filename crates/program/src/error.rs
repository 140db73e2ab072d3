//! Error types for the revive-program crate.

use revive_calendar::CalendarError;

/// Error type for all fallible operations in the revive-program crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgramError {
    /// Returned when the rooms have no floor area in total.
    #[error("total floor area is zero; rooms need valid floor areas")]
    ZeroFloorArea,

    /// Returned when the dwelling count is zero.
    #[error("number of dwellings must be at least 1")]
    NoDwellings,

    /// Returned when a numeric input is negative or not finite.
    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        /// Name of the offending field.
        field: String,
        /// The value supplied.
        value: f64,
        /// Why it was rejected.
        reason: String,
    },

    /// Returned when an hourly schedule has the wrong number of values.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched field.
        field: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Rejects negative and non-finite values.
pub(crate) fn non_negative(field: &str, value: f64) -> Result<f64, ProgramError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProgramError::InvalidValue {
            field: field.to_string(),
            value,
            reason: "must be finite and >= 0".to_string(),
        });
    }
    Ok(value)
}
