//! Saturation vapour pressure (Hyland-Wexler).

use crate::error::{PsychroError, ensure_finite};

/// Triple-point boundary between the ice and liquid-water correlations, in kelvin.
const ICE_BOUNDARY_K: f64 = 273.15;

/// Offset between degrees Celsius and kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Saturation vapour pressure in Pa at absolute temperature `t_kelvin`.
///
/// Uses the correlation over ice at or below 273.15 K and over liquid water above.
///
/// # Errors
///
/// Returns [`PsychroError::NonFinite`] for NaN/infinite input and
/// [`PsychroError::BelowAbsoluteZero`] for `t_kelvin <= 0`.
pub fn saturated_vapor_pressure(t_kelvin: f64) -> Result<f64, PsychroError> {
    let t = ensure_finite("temperature", t_kelvin)?;
    if t <= 0.0 {
        return Err(PsychroError::BelowAbsoluteZero {
            celsius: t - KELVIN_OFFSET,
        });
    }
    let ln_p = if t <= ICE_BOUNDARY_K {
        -5.674_535_9e3 / t + 6.392_524_7 - 9.677_843e-3 * t + 6.221_570_1e-7 * t.powi(2)
            + 2.074_782_5e-9 * t.powi(3)
            - 9.484_024e-13 * t.powi(4)
            + 4.163_501_9 * t.ln()
    } else {
        -5.800_220_6e3 / t + 1.391_499_3 - 4.864_023_9e-2 * t + 4.176_476_8e-5 * t.powi(2)
            - 1.445_209_3e-8 * t.powi(3)
            + 6.545_967_3 * t.ln()
    };
    Ok(ln_p.exp())
}
