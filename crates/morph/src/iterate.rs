//! Damped fixed-point iteration for the morphing amplitude.

use std::fmt;

use tracing::warn;

use crate::config::MorphConfig;
use crate::error::{MorphError, check_finite};
use crate::phase::half_sine_phase;
use crate::result::MorphResult;

/// Weather channel a correction applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Dry-bulb temperature.
    DryBulb,
    /// Dew-point temperature.
    DewPoint,
}

impl Channel {
    /// Snake-case identifier used in config keys.
    pub fn key(self) -> &'static str {
        match self {
            Self::DryBulb => "dry_bulb",
            Self::DewPoint => "dew_point",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DryBulb => "dry-bulb",
            Self::DewPoint => "dew-point",
        })
    }
}

/// Which extreme of the morphed week is driven to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Coldest hour (winter).
    Min,
    /// Hottest hour (summer).
    Max,
}

impl Extremum {
    /// Evaluates the extreme of `values`. Empty input yields NaN.
    pub fn of(self, values: &[f64]) -> f64 {
        match self {
            Self::Min => values.iter().copied().fold(f64::NAN, f64::min),
            Self::Max => values.iter().copied().fold(f64::NAN, f64::max),
        }
    }
}

/// An n-year return value and the extreme it constrains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphTarget {
    value: f64,
    extremum: Extremum,
}

impl MorphTarget {
    /// Creates a target.
    pub fn new(value: f64, extremum: Extremum) -> Self {
        Self { value, extremum }
    }

    /// The return value, degrees C.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The extreme being constrained.
    pub fn extremum(&self) -> Extremum {
        self.extremum
    }
}

fn morphed_extreme(week: &[f64], phase: &[f64], delta: f64, extremum: Extremum) -> f64 {
    let morphed: Vec<f64> = week
        .iter()
        .zip(phase)
        .map(|(&t, &p)| t + delta * p)
        .collect();
    extremum.of(&morphed)
}

/// Finds the amplitude `delta` such that `week[h] + delta * sin(pi * h / len)` has its
/// extreme within tolerance of the target.
///
/// Starts from `target - mean(week)` and applies
/// `delta += relaxation * (target - extreme)` until converged or the iteration cap is
/// reached. Hitting the cap is not an error: the last `delta` is returned with
/// [`MorphResult::converged`] set to `false`.
///
/// # Errors
///
/// Returns [`MorphError::EmptyData`] for an empty week, [`MorphError::NonFinite`] for
/// NaN/infinite inputs, or [`MorphError::InvalidConfig`] for an invalid config.
pub fn morph_week(
    target: &MorphTarget,
    week: &[f64],
    config: &MorphConfig,
) -> Result<MorphResult, MorphError> {
    config.validate()?;
    if week.is_empty() {
        return Err(MorphError::EmptyData {
            field: "week".to_string(),
        });
    }
    check_finite(week, "week")?;
    check_finite(&[target.value], "target")?;

    let phase = half_sine_phase(week.len());
    let mean = week.iter().sum::<f64>() / week.len() as f64;

    let mut delta = target.value - mean;
    let mut extreme = morphed_extreme(week, &phase, delta, target.extremum);
    let mut iterations = 0usize;

    while (target.value - extreme).abs() >= config.tolerance() {
        if iterations >= config.max_iterations() {
            warn!(
                iterations,
                target = target.value,
                extreme,
                "morphing did not converge, using best available delta"
            );
            break;
        }
        iterations += 1;
        delta += config.relaxation_factor() * (target.value - extreme);
        extreme = morphed_extreme(week, &phase, delta, target.extremum);
    }

    let converged = (target.value - extreme).abs() < config.tolerance();
    Ok(MorphResult::new(iterations, delta, extreme, converged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn extremum_of() {
        assert_eq!(Extremum::Min.of(&[3.0, -1.0, 2.0]), -1.0);
        assert_eq!(Extremum::Max.of(&[3.0, -1.0, 2.0]), 3.0);
        assert!(Extremum::Max.of(&[]).is_nan());
    }

    #[test]
    fn constant_week_converges_to_min_target() {
        let week = vec![0.0; 168];
        let target = MorphTarget::new(-15.0, Extremum::Min);
        let r = morph_week(&target, &week, &MorphConfig::default()).unwrap();
        assert!(r.converged());
        assert!(r.iterations() < 100);
        assert_abs_diff_eq!(r.final_extreme(), -15.0, epsilon = 0.01);
    }

    #[test]
    fn constant_week_already_at_target_shape() {
        // Mean is -10, so the initial delta of -5.2 lands exactly on the target at
        // the phase peak.
        let week = vec![-10.0; 168];
        let target = MorphTarget::new(-15.2, Extremum::Min);
        let r = morph_week(&target, &week, &MorphConfig::default()).unwrap();
        assert_abs_diff_eq!(r.delta(), -5.2, epsilon = 0.01);
        assert!(r.iterations() <= 3);
        assert_abs_diff_eq!(r.final_extreme(), -15.2, epsilon = 0.01);
    }

    #[test]
    fn max_target_raises_peak() {
        let week: Vec<f64> = (0..168).map(|h| 25.0 + 5.0 * ((h % 24) as f64 / 24.0)).collect();
        let target = MorphTarget::new(38.0, Extremum::Max);
        let r = morph_week(&target, &week, &MorphConfig::default()).unwrap();
        assert!(r.converged());
        assert!(r.delta() > 0.0);
        assert_abs_diff_eq!(r.final_extreme(), 38.0, epsilon = 0.01);
    }

    #[test]
    fn unreachable_target_caps_iterations() {
        // Min of the morphed week stays at week[0] (phase 0), so the target is unreachable.
        let week = vec![0.0; 168];
        let target = MorphTarget::new(1e9, Extremum::Min);
        let r = morph_week(&target, &week, &MorphConfig::default()).unwrap();
        assert_eq!(r.iterations(), 100);
        assert!(!r.converged());
        assert!(r.delta().is_finite());
    }

    #[test]
    fn custom_iteration_cap() {
        let week = vec![0.0; 168];
        let target = MorphTarget::new(1e9, Extremum::Min);
        let config = MorphConfig::new().with_max_iterations(7);
        let r = morph_week(&target, &week, &config).unwrap();
        assert_eq!(r.iterations(), 7);
    }

    #[test]
    fn rejects_empty_week() {
        let target = MorphTarget::new(0.0, Extremum::Min);
        assert!(matches!(
            morph_week(&target, &[], &MorphConfig::default()),
            Err(MorphError::EmptyData { .. })
        ));
    }

    #[test]
    fn rejects_nan_in_week() {
        let mut week = vec![0.0; 168];
        week[10] = f64::NAN;
        let target = MorphTarget::new(-5.0, Extremum::Min);
        assert_eq!(
            morph_week(&target, &week, &MorphConfig::default()),
            Err(MorphError::NonFinite {
                field: "week".to_string(),
                index: 10
            })
        );
    }
}
