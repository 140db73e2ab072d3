//! Hourly HVAC availability schedules and their outage-mode substitutes.

use revive_calendar::{AnalysisWindow, PaddedWindow};
use serde::{Deserialize, Serialize};

use crate::error::ProgramError;

/// Schedule value meaning the system is switched off.
pub const OFF: f64 = 0.0;

/// An hourly schedule, either one value all year or one value per hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HourlySchedule {
    Constant(f64),
    Hourly(Vec<f64>),
}

impl Default for HourlySchedule {
    fn default() -> Self {
        Self::Constant(1.0)
    }
}

impl HourlySchedule {
    /// Expands to `n_hours` values.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::LengthMismatch`] if an hourly schedule has the
    /// wrong length and [`ProgramError::InvalidValue`] for non-finite values.
    pub fn to_hourly(&self, n_hours: usize, field: &str) -> Result<Vec<f64>, ProgramError> {
        let values = match self {
            Self::Constant(v) => vec![*v; n_hours],
            Self::Hourly(values) => {
                if values.len() != n_hours {
                    return Err(ProgramError::LengthMismatch {
                        expected: n_hours,
                        got: values.len(),
                        field: field.to_string(),
                    });
                }
                values.clone()
            }
        };
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(ProgramError::InvalidValue {
                field: field.to_string(),
                value: bad,
                reason: "schedule values must be finite".to_string(),
            });
        }
        Ok(values)
    }
}

/// Baseline availability schedules of the three conditioning systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseSchedules {
    #[serde(default)]
    pub heating: HourlySchedule,
    #[serde(default)]
    pub cooling: HourlySchedule,
    #[serde(default)]
    pub humidification: HourlySchedule,
}

/// Outage-mode availability schedules, one value per hour of the year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutageSchedules {
    /// Hour windows during which every system is off.
    #[serde(serialize_with = "serialize_windows")]
    pub off_windows: Vec<AnalysisWindow>,
    pub heating: Vec<f64>,
    pub cooling: Vec<f64>,
    pub humidification: Vec<f64>,
}

fn serialize_windows<S: serde::Serializer>(
    windows: &[AnalysisWindow],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(windows.len()))?;
    for w in windows {
        seq.serialize_element(&[w.start(), w.end()])?;
    }
    seq.end()
}

/// Trims `trim_hours` off each end of every padded outage window.
///
/// Trimming is measured from the nominal padding, so a trim equal to the
/// padding yields the core week even when it touches either end of the year.
///
/// # Errors
///
/// Returns [`ProgramError::Calendar`] if a window is too short to trim.
pub fn off_windows(
    outage_windows: &[PaddedWindow],
    trim_hours: usize,
) -> Result<Vec<AnalysisWindow>, ProgramError> {
    outage_windows
        .iter()
        .map(|w| w.trim(trim_hours).map_err(ProgramError::from))
        .collect()
}

/// Copies `base` with every hour inside `off` forced to [`OFF`].
///
/// # Errors
///
/// Returns [`ProgramError::Calendar`] if a window extends past the series.
pub fn switch_off(base: &[f64], off: &[AnalysisWindow]) -> Result<Vec<f64>, ProgramError> {
    let mut values = base.to_vec();
    for window in off {
        window.check_within(values.len())?;
        values[window.range()].fill(OFF);
    }
    Ok(values)
}

/// Builds outage schedules for heating, cooling and humidification.
///
/// Each system keeps its baseline outside the trimmed outage windows and is
/// off inside them.
///
/// # Errors
///
/// Propagates schedule length, window trimming and bounds errors.
pub fn outage_schedules(
    base: &BaseSchedules,
    outage_windows: &[PaddedWindow],
    n_hours: usize,
    trim_hours: usize,
) -> Result<OutageSchedules, ProgramError> {
    let off = off_windows(outage_windows, trim_hours)?;
    Ok(OutageSchedules {
        heating: switch_off(&base.heating.to_hourly(n_hours, "heating")?, &off)?,
        cooling: switch_off(&base.cooling.to_hourly(n_hours, "cooling")?, &off)?,
        humidification: switch_off(
            &base.humidification.to_hourly(n_hours, "humidification")?,
            &off,
        )?,
        off_windows: off,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_expands() {
        let s = HourlySchedule::Constant(0.5);
        assert_eq!(s.to_hourly(3, "x").unwrap(), vec![0.5; 3]);
    }

    #[test]
    fn hourly_length_checked() {
        let s = HourlySchedule::Hourly(vec![1.0; 10]);
        assert_eq!(
            s.to_hourly(8760, "cooling"),
            Err(ProgramError::LengthMismatch {
                expected: 8760,
                got: 10,
                field: "cooling".to_string()
            })
        );
    }

    #[test]
    fn untagged_json() {
        let c: HourlySchedule = serde_json::from_str("1.0").unwrap();
        assert_eq!(c, HourlySchedule::Constant(1.0));
        let h: HourlySchedule = serde_json::from_str("[0.0, 1.0]").unwrap();
        assert_eq!(h, HourlySchedule::Hourly(vec![0.0, 1.0]));
    }

    fn padded(start: usize) -> PaddedWindow {
        AnalysisWindow::new(start, start + 168)
            .unwrap()
            .pad(24, 8760)
            .unwrap()
    }

    #[test]
    fn trimmed_window_is_off() {
        let s = outage_schedules(&BaseSchedules::default(), &[padded(1000)], 8760, 24).unwrap();
        assert_eq!(s.off_windows, vec![AnalysisWindow::new(1000, 1168).unwrap()]);
        assert_eq!(s.heating[999], 1.0);
        assert_eq!(s.heating[1000], OFF);
        assert_eq!(s.cooling[1167], OFF);
        assert_eq!(s.humidification[1168], 1.0);
        assert_eq!(s.heating.iter().filter(|v| **v == OFF).count(), 168);
    }

    #[test]
    fn week_at_year_start_is_off_for_the_whole_week() {
        let s = outage_schedules(&BaseSchedules::default(), &[padded(0)], 8760, 24).unwrap();
        assert_eq!(s.off_windows, vec![AnalysisWindow::new(0, 168).unwrap()]);
        assert!(s.heating[..168].iter().all(|v| *v == OFF));
        assert_eq!(s.heating[168], 1.0);
    }

    #[test]
    fn week_at_year_end_is_off_for_the_whole_week() {
        let s = outage_schedules(&BaseSchedules::default(), &[padded(8760 - 168)], 8760, 24)
            .unwrap();
        assert_eq!(s.off_windows, vec![AnalysisWindow::new(8592, 8760).unwrap()]);
        assert!(s.cooling[8592..].iter().all(|v| *v == OFF));
        assert_eq!(s.cooling[8591], 1.0);
    }

    #[test]
    fn window_too_short_to_trim() {
        let w = AnalysisWindow::new(100, 110).unwrap().pad(2, 8760).unwrap();
        assert!(matches!(
            off_windows(&[w], 24),
            Err(ProgramError::Calendar(_))
        ));
    }

    #[test]
    fn window_past_series_end() {
        let w = AnalysisWindow::new(5, 20).unwrap();
        assert!(switch_off(&[1.0; 10], &[w]).is_err());
    }
}
