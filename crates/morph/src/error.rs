//! Error types for the revive-morph crate.

use revive_calendar::CalendarError;

use crate::extreme_week::Season;

/// Error type for all fallible operations in the revive-morph crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MorphError {
    /// Returned when an input series is empty.
    #[error("input data is empty: {field}")]
    EmptyData {
        /// Name of the empty field.
        field: String,
    },

    /// Returned when array lengths do not match.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched field.
        field: String,
    },

    /// Returned when an extreme week is not exactly one week long.
    #[error("extreme {season} week should be {expected} hours long, got {got}")]
    ExtremeWeekLength {
        /// Which week failed.
        season: Season,
        /// Required length in hours.
        expected: usize,
        /// Actual length in hours.
        got: usize,
    },

    /// Returned when a required n-year return value was not supplied.
    #[error("missing required input: {name}")]
    MissingInput {
        /// Name of the missing input.
        name: String,
    },

    /// Returned when an input value is NaN or infinite.
    #[error("non-finite value in {field} at index {index}")]
    NonFinite {
        /// Name of the offending input.
        field: String,
        /// Position of the first non-finite value.
        index: usize,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped calendar error (invalid dates or windows).
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Rejects a series containing NaN or infinite values, naming the first one.
pub(crate) fn check_finite(values: &[f64], field: &str) -> Result<(), MorphError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(MorphError::NonFinite {
            field: field.to_string(),
            index,
        }),
        None => Ok(()),
    }
}
