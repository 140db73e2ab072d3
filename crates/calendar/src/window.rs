//! Contiguous hour-of-year windows.

use std::fmt;
use std::ops::Range;

use crate::date_hour::DateHour;
use crate::error::CalendarError;
use crate::year::{HOURS_PER_DAY, YearKind};

/// A contiguous half-open range `[start, end)` of hour-of-year indices.
///
/// The timestep is always one hour. Windows never wrap past the end of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisWindow {
    start: usize,
    end: usize,
}

impl AnalysisWindow {
    /// Creates a window over `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWindow`] if `start >= end`.
    pub fn new(start: usize, end: usize) -> Result<Self, CalendarError> {
        if start >= end {
            return Err(CalendarError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds the window running from 00:00 on `(start_month, start_day)` to 23:00
    /// on `(end_month, end_day)`, both days inclusive.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if either date is invalid for `year`, or
    /// [`CalendarError::CrossesYearEnd`] if the end day precedes the start day.
    pub fn from_days(
        (start_month, start_day): (u8, u8),
        (end_month, end_day): (u8, u8),
        year: YearKind,
    ) -> Result<Self, CalendarError> {
        let first = DateHour::new(start_month, start_day, 0, year)?;
        let last = DateHour::new(end_month, end_day, (HOURS_PER_DAY - 1) as u8, year)?;
        let (start, end) = (first.hour_of_year(year), last.hour_of_year(year) + 1);
        if end <= start {
            return Err(CalendarError::CrossesYearEnd {
                start_month,
                start_day,
                end_month,
                end_day,
            });
        }
        Self::new(start, end)
    }

    /// First hour (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last hour.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Timestep in hours. Always 1.
    pub fn timestep(&self) -> usize {
        1
    }

    /// Number of hours covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the window covers no hours.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `hour` lies inside the window.
    pub fn contains(&self, hour: usize) -> bool {
        (self.start..self.end).contains(&hour)
    }

    /// Index range usable for slicing an hourly series.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Pads the window by `hours` on each side, clamped to `[0, n_hours)`.
    pub fn expand(&self, hours: usize, n_hours: usize) -> Self {
        let start = self.start.saturating_sub(hours);
        let end = (self.end + hours).min(n_hours).max(start + 1);
        Self { start, end }
    }

    /// Pads the window by `hours` on each side inside a year of `n_hours`,
    /// remembering the nominal padding.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::HourOutOfRange`] if the window itself does not fit.
    pub fn pad(&self, hours: usize, n_hours: usize) -> Result<PaddedWindow, CalendarError> {
        self.check_within(n_hours)?;
        Ok(PaddedWindow {
            core: *self,
            padding: hours,
            expanded: self.expand(hours, n_hours),
        })
    }

    /// Returns `true` if the two windows share at least one hour.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Checks that the window fits inside a series of `n_hours` values.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::HourOutOfRange`] naming the last hour if it does not.
    pub fn check_within(&self, n_hours: usize) -> Result<(), CalendarError> {
        if self.end > n_hours {
            return Err(CalendarError::HourOutOfRange {
                hour: self.end - 1,
                n_hours,
            });
        }
        Ok(())
    }

    /// Calendar position of the first and last hour.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::HourOutOfRange`] if the window exceeds `year`.
    pub fn bounds(&self, year: YearKind) -> Result<(DateHour, DateHour), CalendarError> {
        Ok((
            DateHour::from_hour_of_year(self.start, year)?,
            DateHour::from_hour_of_year(self.end - 1, year)?,
        ))
    }
}

/// A core window with its lead-in and lead-out padding.
///
/// Near the ends of the year the padding is clamped, so the expanded window can be
/// shorter on one side. Offsets and trimming are always measured against the
/// nominal, unclamped padding, so they stay anchored to the core window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddedWindow {
    core: AnalysisWindow,
    padding: usize,
    expanded: AnalysisWindow,
}

impl PaddedWindow {
    /// The unpadded window.
    pub fn core(&self) -> AnalysisWindow {
        self.core
    }

    /// The padded window, clamped to the year.
    pub fn expanded(&self) -> AnalysisWindow {
        self.expanded
    }

    /// Requested padding on each side.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Padding actually applied before the core window.
    pub fn lead_in(&self) -> usize {
        self.core.start - self.expanded.start
    }

    /// Padding actually applied after the core window.
    pub fn lead_out(&self) -> usize {
        self.expanded.end - self.core.end
    }

    /// Length the padded window would have without clamping.
    pub fn nominal_len(&self) -> usize {
        self.core.len() + 2 * self.padding
    }

    /// Position of the first expanded hour within the nominal padded window.
    pub fn nominal_offset(&self) -> usize {
        self.padding - self.lead_in()
    }

    /// Removes `hours` from each end of the nominal padded window and clamps the
    /// result to the expanded window. Trimming by the padding gives the core window.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWindow`] if nothing would remain.
    pub fn trim(&self, hours: usize) -> Result<AnalysisWindow, CalendarError> {
        let start = (self.core.start + hours)
            .saturating_sub(self.padding)
            .max(self.expanded.start);
        let end = (self.core.end + self.padding)
            .saturating_sub(hours)
            .min(self.expanded.end);
        AnalysisWindow::new(start, end)
    }
}

impl fmt::Display for AnalysisWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
