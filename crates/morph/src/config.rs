//! Configuration types for the morphing pipeline.

use crate::error::MorphError;
use crate::extreme_week::Season;
use crate::iterate::Channel;

/// Which window a morphing correction is written back into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchExtent {
    /// The extreme week padded by the expansion hours, with the phase re-indexed
    /// to the padded window.
    #[default]
    Expanded,
    /// Only the 168-hour extreme week.
    Core,
}

/// Numerical and windowing parameters of the morphing pipeline.
#[derive(Debug, Clone)]
pub struct MorphConfig {
    /// Damping applied to each fixed-point correction.
    relaxation_factor: f64,
    /// Convergence tolerance on the morphed extreme, degrees C.
    tolerance: f64,
    /// Iteration cap.
    max_iterations: usize,
    /// Hours of lead-in/lead-out added on each side of an extreme week.
    expansion_hours: usize,
    /// Window the correction is applied over.
    patch_extent: PatchExtent,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphConfig {
    /// Creates a configuration with relaxation 0.1, tolerance 0.01, 100 iterations
    /// and 24 hours of expansion, patching the expanded window.
    pub fn new() -> Self {
        Self {
            relaxation_factor: 0.1,
            tolerance: 0.01,
            max_iterations: 100,
            expansion_hours: 24,
            patch_extent: PatchExtent::Expanded,
        }
    }

    /// Sets the relaxation factor.
    pub fn with_relaxation_factor(mut self, relaxation_factor: f64) -> Self {
        self.relaxation_factor = relaxation_factor;
        self
    }

    /// Sets the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the expansion applied on each side of an extreme week.
    pub fn with_expansion_hours(mut self, expansion_hours: usize) -> Self {
        self.expansion_hours = expansion_hours;
        self
    }

    /// Sets the patch extent.
    pub fn with_patch_extent(mut self, patch_extent: PatchExtent) -> Self {
        self.patch_extent = patch_extent;
        self
    }

    /// Returns the relaxation factor.
    pub fn relaxation_factor(&self) -> f64 {
        self.relaxation_factor
    }

    /// Returns the convergence tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the expansion hours.
    pub fn expansion_hours(&self) -> usize {
        self.expansion_hours
    }

    /// Returns the patch extent.
    pub fn patch_extent(&self) -> PatchExtent {
        self.patch_extent
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidConfig`] if the relaxation factor or tolerance
    /// is not finite and positive.
    pub fn validate(&self) -> Result<(), MorphError> {
        if !self.relaxation_factor.is_finite() || self.relaxation_factor <= 0.0 {
            return Err(MorphError::InvalidConfig {
                reason: format!(
                    "relaxation_factor must be finite and > 0, got {}",
                    self.relaxation_factor
                ),
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MorphError::InvalidConfig {
                reason: format!(
                    "tolerance must be finite and > 0, got {}",
                    self.tolerance
                ),
            });
        }
        Ok(())
    }
}

/// The four user-supplied n-year return extremes, degrees C.
///
/// Winter values are 10-year return minima, summer values 20-year return maxima.
/// Values are optional until [`ReturnExtremes::get`] is asked for one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnExtremes {
    winter_dry_bulb: Option<f64>,
    winter_dew_point: Option<f64>,
    summer_dry_bulb: Option<f64>,
    summer_dew_point: Option<f64>,
}

impl ReturnExtremes {
    /// Creates an empty set of return extremes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the winter 10-year dry-bulb.
    pub fn with_winter_dry_bulb(mut self, value: f64) -> Self {
        self.winter_dry_bulb = Some(value);
        self
    }

    /// Sets the winter 10-year dew-point.
    pub fn with_winter_dew_point(mut self, value: f64) -> Self {
        self.winter_dew_point = Some(value);
        self
    }

    /// Sets the summer 20-year dry-bulb.
    pub fn with_summer_dry_bulb(mut self, value: f64) -> Self {
        self.summer_dry_bulb = Some(value);
        self
    }

    /// Sets the summer 20-year dew-point.
    pub fn with_summer_dew_point(mut self, value: f64) -> Self {
        self.summer_dew_point = Some(value);
        self
    }

    /// Overlays every value present in `other` onto `self`.
    pub fn merge(mut self, other: &Self) -> Self {
        self.winter_dry_bulb = other.winter_dry_bulb.or(self.winter_dry_bulb);
        self.winter_dew_point = other.winter_dew_point.or(self.winter_dew_point);
        self.summer_dry_bulb = other.summer_dry_bulb.or(self.summer_dry_bulb);
        self.summer_dew_point = other.summer_dew_point.or(self.summer_dew_point);
        self
    }

    /// Returns the target for one season and channel.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::MissingInput`] if the value was never supplied and
    /// [`MorphError::NonFinite`] if it is NaN or infinite.
    pub fn get(&self, season: Season, channel: Channel) -> Result<f64, MorphError> {
        let value = match (season, channel) {
            (Season::Winter, Channel::DryBulb) => self.winter_dry_bulb,
            (Season::Winter, Channel::DewPoint) => self.winter_dew_point,
            (Season::Summer, Channel::DryBulb) => self.summer_dry_bulb,
            (Season::Summer, Channel::DewPoint) => self.summer_dew_point,
        };
        let name = format!("{}_{}", season.key(), channel.key());
        match value {
            None => Err(MorphError::MissingInput { name }),
            Some(v) if !v.is_finite() => Err(MorphError::NonFinite {
                field: name,
                index: 0,
            }),
            Some(v) => Ok(v),
        }
    }

    /// Checks that all four values are present and finite.
    ///
    /// # Errors
    ///
    /// Returns the first [`MorphError::MissingInput`] or [`MorphError::NonFinite`].
    pub fn validate(&self) -> Result<(), MorphError> {
        for season in [Season::Winter, Season::Summer] {
            for channel in [Channel::DryBulb, Channel::DewPoint] {
                self.get(season, channel)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = MorphConfig::default();
        assert_eq!(c.relaxation_factor(), 0.1);
        assert_eq!(c.tolerance(), 0.01);
        assert_eq!(c.max_iterations(), 100);
        assert_eq!(c.expansion_hours(), 24);
        assert_eq!(c.patch_extent(), PatchExtent::Expanded);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let c = MorphConfig::new()
            .with_relaxation_factor(0.5)
            .with_tolerance(0.001)
            .with_max_iterations(10)
            .with_expansion_hours(0)
            .with_patch_extent(PatchExtent::Core);
        assert_eq!(c.relaxation_factor(), 0.5);
        assert_eq!(c.tolerance(), 0.001);
        assert_eq!(c.max_iterations(), 10);
        assert_eq!(c.expansion_hours(), 0);
        assert_eq!(c.patch_extent(), PatchExtent::Core);
    }

    #[test]
    fn validate_rejects_bad_relaxation() {
        let c = MorphConfig::new().with_relaxation_factor(0.0);
        assert!(matches!(c.validate(), Err(MorphError::InvalidConfig { .. })));
        let c = MorphConfig::new().with_relaxation_factor(f64::NAN);
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_tolerance() {
        let c = MorphConfig::new().with_tolerance(-0.01);
        assert!(matches!(c.validate(), Err(MorphError::InvalidConfig { .. })));
    }

    #[test]
    fn return_extremes_missing() {
        let r = ReturnExtremes::new()
            .with_winter_dry_bulb(-20.0)
            .with_winter_dew_point(-25.0)
            .with_summer_dry_bulb(38.0);
        assert_eq!(
            r.validate(),
            Err(MorphError::MissingInput {
                name: "summer_dew_point".to_string()
            })
        );
    }

    #[test]
    fn return_extremes_get() {
        let r = ReturnExtremes::new()
            .with_winter_dry_bulb(-20.0)
            .with_summer_dew_point(24.0);
        assert_eq!(r.get(Season::Winter, Channel::DryBulb).unwrap(), -20.0);
        assert_eq!(r.get(Season::Summer, Channel::DewPoint).unwrap(), 24.0);
    }

    #[test]
    fn return_extremes_non_finite() {
        let r = ReturnExtremes::new().with_winter_dew_point(f64::NAN);
        assert!(matches!(
            r.get(Season::Winter, Channel::DewPoint),
            Err(MorphError::NonFinite { .. })
        ));
    }

    #[test]
    fn return_extremes_merge_prefers_other() {
        let file = ReturnExtremes::new()
            .with_winter_dry_bulb(-20.0)
            .with_summer_dry_bulb(35.0);
        let cli = ReturnExtremes::new().with_summer_dry_bulb(38.0);
        let merged = file.merge(&cli);
        assert_eq!(merged.get(Season::Winter, Channel::DryBulb).unwrap(), -20.0);
        assert_eq!(merged.get(Season::Summer, Channel::DryBulb).unwrap(), 38.0);
    }
}
