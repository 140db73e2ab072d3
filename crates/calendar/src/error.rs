//! Error types for the revive-calendar crate.

/// Error type for all fallible operations in the revive-calendar crate.
///
/// This enum covers validation failures for month, day and hour values,
/// hour-of-year indices, year lengths, and analysis-window bounds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an hour of the day is outside 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour that was provided.
        hour: u8,
    },

    /// Returned when an hour-of-year index does not exist in the year.
    #[error("hour of year {hour} out of range (year has {n_hours} hours)")]
    HourOutOfRange {
        /// The offending hour-of-year index (0-based).
        hour: usize,
        /// Number of hours in the year.
        n_hours: usize,
    },

    /// Returned when a series length is neither 8760 nor 8784 hours.
    #[error("invalid year length: {n_hours} hours (expected 8760 or 8784)")]
    InvalidYearLength {
        /// The length that was provided.
        n_hours: usize,
    },

    /// Returned when a window would be empty or reversed.
    #[error("invalid window: start {start} must be before end {end}")]
    InvalidWindow {
        /// Requested start hour (inclusive).
        start: usize,
        /// Requested end hour (exclusive).
        end: usize,
    },

    /// Returned when a day-bounded period ends on an earlier day than it starts.
    #[error(
        "period {start_month:02}-{start_day:02} to {end_month:02}-{end_day:02} crosses New Year; \
         periods spanning the year boundary are not supported"
    )]
    CrossesYearEnd {
        /// Month of the first day.
        start_month: u8,
        /// First day of the period.
        start_day: u8,
        /// Month of the last day.
        end_month: u8,
        /// Last day of the period.
        end_day: u8,
    },

    /// Returned when a three-letter month abbreviation is not recognised.
    #[error("unknown month name: '{name}'")]
    UnknownMonthName {
        /// The text that failed to parse.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month 2 (max 28)");
    }

    #[test]
    fn error_invalid_hour() {
        let err = CalendarError::InvalidHour { hour: 24 };
        assert_eq!(err.to_string(), "invalid hour: 24 (must be 0..=23)");
    }

    #[test]
    fn error_hour_out_of_range() {
        let err = CalendarError::HourOutOfRange {
            hour: 8760,
            n_hours: 8760,
        };
        assert_eq!(
            err.to_string(),
            "hour of year 8760 out of range (year has 8760 hours)"
        );
    }

    #[test]
    fn error_invalid_year_length() {
        let err = CalendarError::InvalidYearLength { n_hours: 100 };
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn error_invalid_window() {
        let err = CalendarError::InvalidWindow { start: 10, end: 5 };
        assert_eq!(
            err.to_string(),
            "invalid window: start 10 must be before end 5"
        );
    }

    #[test]
    fn error_crosses_year_end() {
        let err = CalendarError::CrossesYearEnd {
            start_month: 12,
            start_day: 29,
            end_month: 1,
            end_day: 4,
        };
        assert_eq!(
            err.to_string(),
            "period 12-29 to 01-04 crosses New Year; \
             periods spanning the year boundary are not supported"
        );
    }

    #[test]
    fn error_unknown_month_name() {
        let err = CalendarError::UnknownMonthName {
            name: "Foo".to_string(),
        };
        assert_eq!(err.to_string(), "unknown month name: 'Foo'");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
