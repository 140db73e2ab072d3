//! Extreme-week location: validation and expansion of the cold and hot weeks.

use std::fmt;

use revive_calendar::{AnalysisWindow, HOURS_PER_WEEK, PaddedWindow};

use crate::error::MorphError;
use crate::iterate::Extremum;

/// Season of an extreme week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    /// Extreme cold week; morphing lowers the minimum.
    Winter,
    /// Extreme hot week; morphing raises the maximum.
    Summer,
}

impl Season {
    /// Lower-case identifier used in config keys and output names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Summer => "summer",
        }
    }

    /// Extreme the season's morphing drives towards its return value.
    pub fn extremum(self) -> Extremum {
        match self {
            Self::Winter => Extremum::Min,
            Self::Summer => Extremum::Max,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A validated extreme week together with its padded outage window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremeWeek {
    season: Season,
    window: PaddedWindow,
}

impl ExtremeWeek {
    /// Validates `core` as a one-week window inside a year of `n_hours` and pads it by
    /// `expansion_hours` on each side, clamped to the year.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::ExtremeWeekLength`] if `core` is not 168 hours and
    /// [`MorphError::Calendar`] if it does not fit in the year.
    pub fn new(
        season: Season,
        core: AnalysisWindow,
        n_hours: usize,
        expansion_hours: usize,
    ) -> Result<Self, MorphError> {
        if core.len() != HOURS_PER_WEEK {
            return Err(MorphError::ExtremeWeekLength {
                season,
                expected: HOURS_PER_WEEK,
                got: core.len(),
            });
        }
        let window = core.pad(expansion_hours, n_hours)?;
        Ok(Self { season, window })
    }

    /// Season of the week.
    pub fn season(&self) -> Season {
        self.season
    }

    /// The 168-hour extreme week.
    pub fn core(&self) -> AnalysisWindow {
        self.window.core()
    }

    /// The week padded by the expansion hours, clamped to the year.
    pub fn expanded(&self) -> AnalysisWindow {
        self.window.expanded()
    }

    /// The week together with its nominal padding.
    pub fn padded(&self) -> PaddedWindow {
        self.window
    }
}

/// The extreme cold and hot weeks of one climate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremeWeeks {
    winter: ExtremeWeek,
    summer: ExtremeWeek,
}

impl ExtremeWeeks {
    /// The extreme cold week.
    pub fn winter(&self) -> &ExtremeWeek {
        &self.winter
    }

    /// The extreme hot week.
    pub fn summer(&self) -> &ExtremeWeek {
        &self.summer
    }

    /// Returns the week for `season`.
    pub fn get(&self, season: Season) -> &ExtremeWeek {
        match season {
            Season::Winter => &self.winter,
            Season::Summer => &self.summer,
        }
    }
}

/// Validates both extreme weeks of a climate record and builds their expanded windows.
///
/// # Errors
///
/// Returns [`MorphError::ExtremeWeekLength`] if either week is not exactly 168 hours,
/// or [`MorphError::Calendar`] if a week lies outside a year of `n_hours`.
pub fn locate_extreme_weeks(
    cold_week: AnalysisWindow,
    hot_week: AnalysisWindow,
    n_hours: usize,
    expansion_hours: usize,
) -> Result<ExtremeWeeks, MorphError> {
    let winter = ExtremeWeek::new(Season::Winter, cold_week, n_hours, expansion_hours)?;
    let summer = ExtremeWeek::new(Season::Summer, hot_week, n_hours, expansion_hours)?;
    tracing::info!(
        winter = %winter.expanded(),
        summer = %summer.expanded(),
        "using extreme weeks"
    );
    Ok(ExtremeWeeks { winter, summer })
}
