//! Calendar position of a single hour in an annual record.

use std::fmt;

use crate::error::CalendarError;
use crate::year::{HOURS_PER_DAY, YearKind, month_abbr};

/// A (month, day, hour-of-day) triple within a year of known [`YearKind`].
///
/// `hour` is 0-based (0..=23), so hour-of-year 0 is January 1 at 00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateHour {
    month: u8,
    day: u8,
    hour: u8,
}

impl DateHour {
    /// Creates a validated `DateHour`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`], [`CalendarError::InvalidDay`] or
    /// [`CalendarError::InvalidHour`] when a component is out of range for `year`.
    pub fn new(month: u8, day: u8, hour: u8, year: YearKind) -> Result<Self, CalendarError> {
        let max_day = year.days_in_month(month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        if hour as usize >= HOURS_PER_DAY {
            return Err(CalendarError::InvalidHour { hour });
        }
        Ok(Self { month, day, hour })
    }

    /// Converts a 0-based hour-of-year index back to a calendar position.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::HourOutOfRange`] if `hour_of_year >= year.n_hours()`.
    pub fn from_hour_of_year(hour_of_year: usize, year: YearKind) -> Result<Self, CalendarError> {
        let n_hours = year.n_hours();
        if hour_of_year >= n_hours {
            return Err(CalendarError::HourOutOfRange {
                hour: hour_of_year,
                n_hours,
            });
        }
        let day_of_year = hour_of_year / HOURS_PER_DAY;
        let hour = (hour_of_year % HOURS_PER_DAY) as u8;
        let mut month = 12u8;
        for m in 2..=12u8 {
            if year.month_start_day(m) > day_of_year {
                month = m - 1;
                break;
            }
        }
        let day = (day_of_year - year.month_start_day(month)) as u8 + 1;
        Ok(Self { month, day, hour })
    }

    /// 0-based hour-of-year index of this position.
    pub fn hour_of_year(self, year: YearKind) -> usize {
        let day_of_year = year.month_start_day(self.month) + self.day as usize - 1;
        day_of_year * HOURS_PER_DAY + self.hour as usize
    }

    /// Month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Day of month (1-based).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Hour of day (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }
}

impl fmt::Display for DateHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>2} {:02}:00",
            month_abbr(self.month),
            self.day,
            self.hour
        )
    }
}
