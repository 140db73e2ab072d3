//! Extreme-week periods from EnergyPlus climate statistics (STAT) files.

use std::path::Path;

use regex::Regex;
use revive_calendar::{AnalysisWindow, YearKind, parse_month_abbr};
use tracing::debug;

use crate::error::IoError;

/// `Extreme Hot Week Period selected: Jul 13:Jul 19`, with flexible spacing.
const EXTREME_WEEK_PATTERN: &str =
    r"Extreme (Hot|Cold) Week Period selected:\s*(\w{3})\s*(\d{1,2}):\s*(\w{3})\s*(\d{1,2})";

/// The extreme cold and hot weeks named in a STAT file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremePeriods {
    /// Extreme cold week, 00:00 of the first day to 23:00 of the last.
    pub cold: AnalysisWindow,
    /// Extreme hot week.
    pub hot: AnalysisWindow,
}

fn window_from_captures(
    caps: &regex::Captures<'_>,
    year: YearKind,
) -> Result<AnalysisWindow, IoError> {
    let day = |i: usize| -> Result<u8, IoError> {
        caps[i].parse::<u8>().map_err(|e| IoError::Validation {
            count: 1,
            details: format!("day '{}' in '{}': {e}", &caps[i], &caps[0]),
        })
    };
    let start = (parse_month_abbr(&caps[2])?, day(3)?);
    let end = (parse_month_abbr(&caps[4])?, day(5)?);
    Ok(AnalysisWindow::from_days(start, end, year)?)
}

/// Finds both extreme-week periods in STAT text. When a period line appears
/// more than once the first one is used.
///
/// # Errors
///
/// Returns [`IoError::MissingPeriod`] if either line is absent and
/// [`IoError::Calendar`] for an impossible date or a period spanning New Year.
pub fn parse_stat(text: &str, year: YearKind, path: &Path) -> Result<ExtremePeriods, IoError> {
    let pattern = Regex::new(EXTREME_WEEK_PATTERN).map_err(|e| IoError::Validation {
        count: 1,
        details: e.to_string(),
    })?;
    let mut cold = None;
    let mut hot = None;
    for caps in pattern.captures_iter(text) {
        let slot = if &caps[1] == "Cold" { &mut cold } else { &mut hot };
        if slot.is_none() {
            *slot = Some(window_from_captures(&caps, year)?);
        }
    }
    let missing = |name: &str| IoError::MissingPeriod {
        name: format!("Extreme {name} Week Period selected"),
        path: path.to_path_buf(),
    };
    let periods = ExtremePeriods {
        cold: cold.ok_or_else(|| missing("Cold"))?,
        hot: hot.ok_or_else(|| missing("Hot"))?,
    };
    debug!(cold = %periods.cold, hot = %periods.hot, "parsed extreme weeks");
    Ok(periods)
}

/// Reads a STAT file from disk. The file is commonly Latin-1; bytes that are
/// not valid UTF-8 are replaced before parsing.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Io`] on read failure and
/// the errors of [`parse_stat`].
pub fn read_stat(path: &Path, year: YearKind) -> Result<ExtremePeriods, IoError> {
    let bytes = std::fs::read(path).map_err(|e| IoError::io(path, e))?;
    parse_stat(&String::from_utf8_lossy(&bytes), year, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use revive_calendar::HOURS_PER_WEEK;

    const STAT: &str = "\
 - Extreme Hot Week Period selected: Jul 13:Jul 19, Maximum Temp= 36.10°C, Deviation=|8.5|°C
 - Typical Summer Week Period selected: Aug  3:Aug  9
 - Extreme Cold Week Period selected: Jan  6:Jan 12, Minimum Temp=-23.90°C
";

    #[test]
    fn parses_both_weeks() {
        let p = parse_stat(STAT, YearKind::Standard, Path::new("x.stat")).unwrap();
        assert_eq!(p.cold.start(), 5 * 24);
        assert_eq!(p.cold.len(), HOURS_PER_WEEK);
        let jul_13 = (181 + 12) * 24;
        assert_eq!(p.hot.start(), jul_13);
        assert_eq!(p.hot.len(), HOURS_PER_WEEK);
    }

    #[test]
    fn leap_shifts_hot_week() {
        let p = parse_stat(STAT, YearKind::Leap, Path::new("x.stat")).unwrap();
        assert_eq!(p.hot.start(), (182 + 12) * 24);
        assert_eq!(p.cold.start(), 5 * 24);
    }

    #[test]
    fn missing_cold_week() {
        let text = " - Extreme Hot Week Period selected: Jul 13:Jul 19\n";
        let err = parse_stat(text, YearKind::Standard, Path::new("x.stat")).unwrap_err();
        match err {
            IoError::MissingPeriod { name, .. } => assert!(name.contains("Cold")),
            other => panic!("expected MissingPeriod, got {other:?}"),
        }
    }

    #[test]
    fn unknown_month() {
        let text = "Extreme Hot Week Period selected: Xyz 13:Jul 19\n\
                    Extreme Cold Week Period selected: Jan  6:Jan 12\n";
        let err = parse_stat(text, YearKind::Standard, Path::new("x.stat")).unwrap_err();
        assert!(matches!(err, IoError::Calendar { .. }));
    }

    #[test]
    fn period_across_new_year_rejected() {
        let text = "Extreme Hot Week Period selected: Jul 13:Jul 19\n\
                    Extreme Cold Week Period selected: Dec 29:Jan  4\n";
        let err = parse_stat(text, YearKind::Standard, Path::new("x.stat")).unwrap_err();
        assert!(matches!(err, IoError::Calendar { .. }));
        let message = err.to_string();
        assert!(message.contains("crosses New Year"), "{message}");
        assert!(message.contains("12-29 to 01-04"), "{message}");
    }
}
