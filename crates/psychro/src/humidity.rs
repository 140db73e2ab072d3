//! Relative humidity and dew-point.

use crate::error::{PsychroError, ensure_finite};
use crate::saturation::{KELVIN_OFFSET, saturated_vapor_pressure};

/// Psychrometer coefficient for a ventilated wet-bulb, 1/K.
const PSYCHROMETER_COEFFICIENT: f64 = 0.000_662;

/// Dew-point reported for completely dry air.
pub const DRY_AIR_DEW_POINT_C: f64 = -273.15;

/// Relative humidity (%) from dry-bulb and wet-bulb temperatures (C) at `pressure_pa`.
///
/// # Errors
///
/// Returns [`PsychroError::NonFinite`] for non-finite inputs and
/// [`PsychroError::NonPositiveVaporPressure`] if the wet-bulb is so depressed that no
/// water vapour remains.
pub fn rel_humid_from_db_wb(
    dry_bulb: f64,
    wet_bulb: f64,
    pressure_pa: f64,
) -> Result<f64, PsychroError> {
    let dry_bulb = ensure_finite("dry_bulb", dry_bulb)?;
    let wet_bulb = ensure_finite("wet_bulb", wet_bulb)?;
    let pressure_pa = ensure_finite("pressure", pressure_pa)?;

    let p_ws_db = saturated_vapor_pressure(dry_bulb + KELVIN_OFFSET)?;
    let p_ws_wb = saturated_vapor_pressure(wet_bulb + KELVIN_OFFSET)?;
    let p_w = p_ws_wb - pressure_pa * PSYCHROMETER_COEFFICIENT * (dry_bulb - wet_bulb);
    if p_w < 0.0 {
        return Err(PsychroError::NonPositiveVaporPressure {
            dry_bulb,
            wet_bulb,
            vapor_pressure: p_w,
        });
    }
    Ok(p_w / p_ws_db * 100.0)
}

/// Dew-point (C) from dry-bulb (C) and relative humidity (%).
///
/// ASHRAE Fundamentals correlation, with the sub-zero branch used when the
/// above-freezing branch yields a negative result. Zero humidity returns
/// [`DRY_AIR_DEW_POINT_C`].
///
/// # Errors
///
/// Returns [`PsychroError::RelativeHumidityOutOfRange`] outside 0..=100 % and
/// [`PsychroError::NonFinite`] for non-finite inputs.
pub fn dew_point_from_db_rh(dry_bulb: f64, rel_humid: f64) -> Result<f64, PsychroError> {
    let dry_bulb = ensure_finite("dry_bulb", dry_bulb)?;
    let rel_humid = ensure_finite("rel_humid", rel_humid)?;
    if !(0.0..=100.0).contains(&rel_humid) {
        return Err(PsychroError::RelativeHumidityOutOfRange { value: rel_humid });
    }
    if rel_humid == 0.0 {
        return Ok(DRY_AIR_DEW_POINT_C);
    }

    let p_ws = saturated_vapor_pressure(dry_bulb + KELVIN_OFFSET)?;
    let p_w_kpa = p_ws * rel_humid / 100.0 / 1000.0;
    let alpha = p_w_kpa.ln();

    let dew_point = 6.54
        + 14.526 * alpha
        + 0.7389 * alpha.powi(2)
        + 0.094_86 * alpha.powi(3)
        + 0.4569 * p_w_kpa.powf(0.1984);
    if dew_point < 0.0 {
        Ok(6.09 + 12.608 * alpha + 0.4959 * alpha.powi(2))
    } else {
        Ok(dew_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn dew_point_20c_50pct() {
        let dp = dew_point_from_db_rh(20.0, 50.0).unwrap();
        assert_abs_diff_eq!(dp, 9.3, epsilon = 0.05);
    }

    #[test]
    fn dew_point_saturated_is_dry_bulb() {
        let dp = dew_point_from_db_rh(20.0, 100.0).unwrap();
        assert_abs_diff_eq!(dp, 20.0, epsilon = 0.1);
    }

    #[test]
    fn dew_point_below_freezing() {
        let dp = dew_point_from_db_rh(-10.0, 100.0).unwrap();
        assert_abs_diff_eq!(dp, -10.0, epsilon = 0.1);
    }

    #[test]
    fn dew_point_dry_air() {
        assert_eq!(dew_point_from_db_rh(25.0, 0.0).unwrap(), DRY_AIR_DEW_POINT_C);
    }

    #[test]
    fn dew_point_rejects_bad_rh() {
        assert!(matches!(
            dew_point_from_db_rh(20.0, 101.0),
            Err(PsychroError::RelativeHumidityOutOfRange { .. })
        ));
        assert!(dew_point_from_db_rh(20.0, -1.0).is_err());
    }

    #[test]
    fn rh_equal_bulbs_is_saturated() {
        let rh = rel_humid_from_db_wb(25.0, 25.0, 101_325.0).unwrap();
        assert_relative_eq!(rh, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn rh_typical_summer() {
        // 30 C dry-bulb, 20 C wet-bulb at sea level is roughly 40 % RH.
        let rh = rel_humid_from_db_wb(30.0, 20.0, 101_325.0).unwrap();
        assert!((38.0..43.0).contains(&rh), "rh = {rh}");
    }

    #[test]
    fn rh_rejects_impossible_wet_bulb() {
        assert!(matches!(
            rel_humid_from_db_wb(45.0, -20.0, 101_325.0),
            Err(PsychroError::NonPositiveVaporPressure { .. })
        ));
    }
}
