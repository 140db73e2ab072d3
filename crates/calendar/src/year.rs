//! Year length and month tables for hourly annual records.

use crate::error::CalendarError;

/// Hours in one day.
pub const HOURS_PER_DAY: usize = 24;

/// Hours in one week.
pub const HOURS_PER_WEEK: usize = 7 * HOURS_PER_DAY;

/// Number of days in each month of a standard year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// 0-based day-of-year on which each month starts in a standard year (index 0 unused).
pub(crate) const MONTH_START_DAY: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Three-letter English month abbreviations, as written in climate statistics files.
const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar flavour of an hourly annual record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearKind {
    /// 365 days, 8760 hours.
    #[default]
    Standard,
    /// 366 days, 8784 hours.
    Leap,
}

impl YearKind {
    /// Infers the year kind from the length of an hourly series.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearLength`] unless `n_hours` is 8760 or 8784.
    pub fn from_n_hours(n_hours: usize) -> Result<Self, CalendarError> {
        match n_hours {
            8760 => Ok(Self::Standard),
            8784 => Ok(Self::Leap),
            _ => Err(CalendarError::InvalidYearLength { n_hours }),
        }
    }

    /// Number of days in the year.
    pub fn n_days(self) -> usize {
        match self {
            Self::Standard => 365,
            Self::Leap => 366,
        }
    }

    /// Number of hours in the year.
    pub fn n_hours(self) -> usize {
        self.n_days() * HOURS_PER_DAY
    }

    /// Number of days in `month`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn days_in_month(self, month: u8) -> Result<u8, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let days = DAYS_PER_MONTH[month as usize];
        Ok(if month == 2 && self == Self::Leap {
            days + 1
        } else {
            days
        })
    }

    /// 0-based day-of-year of the first day of `month`. Caller guarantees 1..=12.
    pub(crate) fn month_start_day(self, month: u8) -> usize {
        let start = MONTH_START_DAY[month as usize] as usize;
        if month > 2 && self == Self::Leap {
            start + 1
        } else {
            start
        }
    }
}

/// Parses a three-letter month abbreviation (`"Jan"` .. `"Dec"`, case-insensitive).
///
/// # Errors
///
/// Returns [`CalendarError::UnknownMonthName`] if the text is not a month abbreviation.
pub fn parse_month_abbr(name: &str) -> Result<u8, CalendarError> {
    let trimmed = name.trim();
    MONTH_ABBR
        .iter()
        .position(|abbr| abbr.eq_ignore_ascii_case(trimmed))
        .map(|i| i as u8 + 1)
        .ok_or_else(|| CalendarError::UnknownMonthName {
            name: name.to_string(),
        })
}

/// Returns the three-letter abbreviation for `month`, or `"???"` outside 1..=12.
pub fn month_abbr(month: u8) -> &'static str {
    match month {
        1..=12 => MONTH_ABBR[month as usize - 1],
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_kind_from_n_hours() {
        assert_eq!(YearKind::from_n_hours(8760).unwrap(), YearKind::Standard);
        assert_eq!(YearKind::from_n_hours(8784).unwrap(), YearKind::Leap);
        assert_eq!(
            YearKind::from_n_hours(8761),
            Err(CalendarError::InvalidYearLength { n_hours: 8761 })
        );
    }

    #[test]
    fn n_hours() {
        assert_eq!(YearKind::Standard.n_hours(), 8760);
        assert_eq!(YearKind::Leap.n_hours(), 8784);
    }

    #[test]
    fn days_in_month_sum_to_year() {
        for kind in [YearKind::Standard, YearKind::Leap] {
            let total: usize = (1..=12)
                .map(|m| kind.days_in_month(m).unwrap() as usize)
                .sum();
            assert_eq!(total, kind.n_days());
        }
    }

    #[test]
    fn february_leap() {
        assert_eq!(YearKind::Standard.days_in_month(2).unwrap(), 28);
        assert_eq!(YearKind::Leap.days_in_month(2).unwrap(), 29);
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(
            YearKind::Standard.days_in_month(0),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            YearKind::Leap.days_in_month(13),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn month_start_day_consistent() {
        for kind in [YearKind::Standard, YearKind::Leap] {
            let mut expected = 0usize;
            for m in 1..=12u8 {
                assert_eq!(kind.month_start_day(m), expected, "{kind:?} month {m}");
                expected += kind.days_in_month(m).unwrap() as usize;
            }
        }
    }

    #[test]
    fn parse_month_abbr_all() {
        for (i, abbr) in MONTH_ABBR.iter().enumerate() {
            assert_eq!(parse_month_abbr(abbr).unwrap(), i as u8 + 1);
        }
    }

    #[test]
    fn parse_month_abbr_case_and_whitespace() {
        assert_eq!(parse_month_abbr(" jan ").unwrap(), 1);
        assert_eq!(parse_month_abbr("DEC").unwrap(), 12);
    }

    #[test]
    fn parse_month_abbr_unknown() {
        assert!(matches!(
            parse_month_abbr("Foo"),
            Err(CalendarError::UnknownMonthName { .. })
        ));
    }

    #[test]
    fn month_abbr_lookup() {
        assert_eq!(month_abbr(1), "Jan");
        assert_eq!(month_abbr(12), "Dec");
        assert_eq!(month_abbr(0), "???");
    }
}
