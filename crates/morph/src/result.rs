//! Result types for the morphing pipeline.

use crate::extreme_week::{ExtremeWeeks, Season};
use crate::iterate::Channel;

/// Outcome of one morphing iteration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphResult {
    /// Number of correction steps taken.
    iterations: usize,
    /// Amplitude applied through the phase window.
    delta: f64,
    /// Extreme of the morphed week for the final `delta`.
    final_extreme: f64,
    /// Whether the final extreme is within tolerance of the target.
    converged: bool,
}

impl MorphResult {
    /// Creates a new morph result.
    pub fn new(iterations: usize, delta: f64, final_extreme: f64, converged: bool) -> Self {
        Self {
            iterations,
            delta,
            final_extreme,
            converged,
        }
    }

    /// Returns the number of correction steps taken.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the amplitude.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the extreme of the morphed week.
    pub fn final_extreme(&self) -> f64 {
        self.final_extreme
    }

    /// Returns `true` if the tolerance was met before the iteration cap.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// The four morphing factors of one weather file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphFactors {
    /// Winter dry-bulb.
    pub winter_dry_bulb: MorphResult,
    /// Winter dew-point.
    pub winter_dew_point: MorphResult,
    /// Summer dry-bulb.
    pub summer_dry_bulb: MorphResult,
    /// Summer dew-point.
    pub summer_dew_point: MorphResult,
}

impl MorphFactors {
    /// Returns the factor for one season and channel.
    pub fn get(&self, season: Season, channel: Channel) -> &MorphResult {
        match (season, channel) {
            (Season::Winter, Channel::DryBulb) => &self.winter_dry_bulb,
            (Season::Winter, Channel::DewPoint) => &self.winter_dew_point,
            (Season::Summer, Channel::DryBulb) => &self.summer_dry_bulb,
            (Season::Summer, Channel::DewPoint) => &self.summer_dew_point,
        }
    }

    /// Returns `true` if all four runs converged.
    pub fn all_converged(&self) -> bool {
        [
            self.winter_dry_bulb,
            self.winter_dew_point,
            self.summer_dry_bulb,
            self.summer_dew_point,
        ]
        .iter()
        .all(MorphResult::converged)
    }
}

/// The complete output of the morphing pipeline.
#[derive(Debug, Clone)]
pub struct ResiliencyWeather {
    /// Patched annual dry-bulb, degrees C.
    dry_bulb: Vec<f64>,
    /// Patched and clamped annual dew-point, degrees C.
    dew_point: Vec<f64>,
    /// Morphing factors.
    factors: MorphFactors,
    /// Extreme weeks used.
    weeks: ExtremeWeeks,
    /// Hours where dew-point was lowered to dry-bulb.
    dew_point_corrections: usize,
}

impl ResiliencyWeather {
    /// Creates a new result.
    pub fn new(
        dry_bulb: Vec<f64>,
        dew_point: Vec<f64>,
        factors: MorphFactors,
        weeks: ExtremeWeeks,
        dew_point_corrections: usize,
    ) -> Self {
        Self {
            dry_bulb,
            dew_point,
            factors,
            weeks,
            dew_point_corrections,
        }
    }

    /// Returns the patched dry-bulb series.
    pub fn dry_bulb(&self) -> &[f64] {
        &self.dry_bulb
    }

    /// Returns the patched dew-point series.
    pub fn dew_point(&self) -> &[f64] {
        &self.dew_point
    }

    /// Returns the morphing factors.
    pub fn factors(&self) -> &MorphFactors {
        &self.factors
    }

    /// Returns the extreme weeks.
    pub fn weeks(&self) -> &ExtremeWeeks {
        &self.weeks
    }

    /// Returns the number of hours corrected by the dew-point clamp.
    pub fn dew_point_corrections(&self) -> usize {
        self.dew_point_corrections
    }

    /// Consumes self and returns the owned `(dry_bulb, dew_point)` series.
    pub fn into_series(self) -> (Vec<f64>, Vec<f64>) {
        (self.dry_bulb, self.dew_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(converged: [bool; 4]) -> MorphFactors {
        MorphFactors {
            winter_dry_bulb: MorphResult::new(1, -5.0, -20.0, converged[0]),
            winter_dew_point: MorphResult::new(2, -4.0, -25.0, converged[1]),
            summer_dry_bulb: MorphResult::new(3, 3.0, 38.0, converged[2]),
            summer_dew_point: MorphResult::new(4, 2.0, 24.0, converged[3]),
        }
    }

    #[test]
    fn morph_result_accessors() {
        let r = MorphResult::new(3, -5.2, -15.2, true);
        assert_eq!(r.iterations(), 3);
        assert_eq!(r.delta(), -5.2);
        assert_eq!(r.final_extreme(), -15.2);
        assert!(r.converged());
    }

    #[test]
    fn factors_get() {
        let f = factors([true; 4]);
        assert_eq!(f.get(Season::Winter, Channel::DewPoint).iterations(), 2);
        assert_eq!(f.get(Season::Summer, Channel::DryBulb).delta(), 3.0);
    }

    #[test]
    fn factors_all_converged() {
        assert!(factors([true; 4]).all_converged());
        assert!(!factors([true, true, false, true]).all_converged());
    }
}
