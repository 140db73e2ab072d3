//! Barometric pressure from site elevation.

use crate::error::{PsychroError, ensure_finite};

/// Standard sea-level air pressure, Pa.
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

const FEET_PER_METER_DIVISOR: f64 = 0.3048;

/// Air pressure in Pa for an elevation in metres; standard pressure when `None`.
///
/// Uses the standard-atmosphere relation in inches of mercury, converted to Pa.
///
/// # Errors
///
/// Returns [`PsychroError::NonFinite`] for NaN or infinite elevations.
pub fn air_pressure_from_elevation(elevation_m: Option<f64>) -> Result<f64, PsychroError> {
    let Some(elevation) = elevation_m else {
        return Ok(STANDARD_PRESSURE_PA);
    };
    let elevation = ensure_finite("elevation", elevation)?;
    let elevation_ft = elevation / FEET_PER_METER_DIVISOR;
    let in_hg = 29.921 * (1.0 - 6.875_35e-6 * elevation_ft).powf(5.256);
    let kpa = in_hg * 3.386_50;
    Ok(kpa * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn none_is_standard() {
        assert_eq!(air_pressure_from_elevation(None).unwrap(), STANDARD_PRESSURE_PA);
    }

    #[test]
    fn sea_level_close_to_standard() {
        let p = air_pressure_from_elevation(Some(0.0)).unwrap();
        assert_relative_eq!(p, STANDARD_PRESSURE_PA, max_relative = 1e-4);
    }

    #[test]
    fn denver() {
        // ~1609 m
        let p = air_pressure_from_elevation(Some(1609.0)).unwrap();
        assert_relative_eq!(p, 83_400.0, max_relative = 5e-3);
    }

    #[test]
    fn decreases_with_height() {
        let low = air_pressure_from_elevation(Some(100.0)).unwrap();
        let high = air_pressure_from_elevation(Some(1000.0)).unwrap();
        assert!(high < low);
    }
}
