//! Threshold configuration for the classifier.

use serde::Serialize;

use crate::error::ResilienceError;

/// Standard Effective Temperature limits for winter degree-hours, degrees C.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinterThresholds {
    upper_c: f64,
    lower_c: f64,
}

impl Default for WinterThresholds {
    fn default() -> Self {
        Self::new()
    }
}

impl WinterThresholds {
    /// 12.22222 C (54 F) and 2.22222 C (36 F).
    pub fn new() -> Self {
        Self {
            upper_c: 12.222_22,
            lower_c: 2.222_22,
        }
    }

    /// Sets the upper threshold.
    pub fn with_upper_c(mut self, upper_c: f64) -> Self {
        self.upper_c = upper_c;
        self
    }

    /// Sets the lower threshold.
    pub fn with_lower_c(mut self, lower_c: f64) -> Self {
        self.lower_c = lower_c;
        self
    }

    /// Upper threshold, degrees C.
    pub fn upper_c(&self) -> f64 {
        self.upper_c
    }

    /// Lower threshold, degrees C.
    pub fn lower_c(&self) -> f64 {
        self.lower_c
    }

    /// Validates the thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ResilienceError::InvalidConfig`] unless both are finite and
    /// `lower_c < upper_c`.
    pub fn validate(&self) -> Result<(), ResilienceError> {
        if !self.upper_c.is_finite() || !self.lower_c.is_finite() {
            return Err(ResilienceError::InvalidConfig {
                reason: "winter thresholds must be finite".to_string(),
            });
        }
        if self.lower_c >= self.upper_c {
            return Err(ResilienceError::InvalidConfig {
                reason: format!(
                    "winter lower threshold {} must be below upper threshold {}",
                    self.lower_c, self.upper_c
                ),
            });
        }
        Ok(())
    }
}

/// Lower bounds of the heat-index bands, degrees C.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatIndexBands {
    caution_c: f64,
    warning_c: f64,
    danger_c: f64,
    extreme_danger_c: f64,
}

impl Default for HeatIndexBands {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatIndexBands {
    /// 26.7 C (80 F), 32.2 C (90 F), 39.4 C (103 F) and 51.7 C (125 F).
    pub fn new() -> Self {
        Self {
            caution_c: 26.7,
            warning_c: 32.2,
            danger_c: 39.4,
            extreme_danger_c: 51.7,
        }
    }

    /// Sets all four lower bounds, in increasing severity.
    pub fn with_bounds(
        mut self,
        caution_c: f64,
        warning_c: f64,
        danger_c: f64,
        extreme_danger_c: f64,
    ) -> Self {
        self.caution_c = caution_c;
        self.warning_c = warning_c;
        self.danger_c = danger_c;
        self.extreme_danger_c = extreme_danger_c;
        self
    }

    /// Caution lower bound.
    pub fn caution_c(&self) -> f64 {
        self.caution_c
    }

    /// Warning lower bound.
    pub fn warning_c(&self) -> f64 {
        self.warning_c
    }

    /// Danger lower bound.
    pub fn danger_c(&self) -> f64 {
        self.danger_c
    }

    /// Extreme-danger lower bound.
    pub fn extreme_danger_c(&self) -> f64 {
        self.extreme_danger_c
    }

    /// Validates the bands.
    ///
    /// # Errors
    ///
    /// Returns [`ResilienceError::InvalidConfig`] unless all bounds are finite and
    /// strictly increasing.
    pub fn validate(&self) -> Result<(), ResilienceError> {
        let bounds = [
            self.caution_c,
            self.warning_c,
            self.danger_c,
            self.extreme_danger_c,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(ResilienceError::InvalidConfig {
                reason: "heat-index bands must be finite".to_string(),
            });
        }
        if bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ResilienceError::InvalidConfig {
                reason: format!("heat-index bands must be strictly increasing, got {bounds:?}"),
            });
        }
        Ok(())
    }
}

/// Complete classifier configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassifierConfig {
    winter: WinterThresholds,
    summer: HeatIndexBands,
}

impl ClassifierConfig {
    /// Creates a configuration with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the winter thresholds.
    pub fn with_winter(mut self, winter: WinterThresholds) -> Self {
        self.winter = winter;
        self
    }

    /// Sets the heat-index bands.
    pub fn with_summer(mut self, summer: HeatIndexBands) -> Self {
        self.summer = summer;
        self
    }

    /// Winter thresholds.
    pub fn winter(&self) -> &WinterThresholds {
        &self.winter
    }

    /// Heat-index bands.
    pub fn summer(&self) -> &HeatIndexBands {
        &self.summer
    }

    /// Validates both parts.
    ///
    /// # Errors
    ///
    /// Propagates [`ResilienceError::InvalidConfig`].
    pub fn validate(&self) -> Result<(), ResilienceError> {
        self.winter.validate()?;
        self.summer.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = ClassifierConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.winter().upper_c(), 12.222_22);
        assert_eq!(c.winter().lower_c(), 2.222_22);
        assert_eq!(c.summer().caution_c(), 26.7);
        assert_eq!(c.summer().extreme_danger_c(), 51.7);
    }

    #[test]
    fn winter_rejects_inverted() {
        let w = WinterThresholds::new().with_lower_c(15.0);
        assert!(matches!(w.validate(), Err(ResilienceError::InvalidConfig { .. })));
    }

    #[test]
    fn bands_reject_unordered() {
        let b = HeatIndexBands::new().with_bounds(26.7, 40.0, 39.4, 51.7);
        assert!(matches!(b.validate(), Err(ResilienceError::InvalidConfig { .. })));
    }

    #[test]
    fn bands_reject_nan() {
        let b = HeatIndexBands::new().with_bounds(f64::NAN, 32.2, 39.4, 51.7);
        assert!(b.validate().is_err());
    }

    #[test]
    fn config_serializes() {
        let json = serde_json::to_string(&ClassifierConfig::default()).unwrap();
        assert!(json.contains("\"upper_c\":12.22222"));
        assert!(json.contains("\"danger_c\":39.4"));
    }
}
