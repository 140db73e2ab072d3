//! Writing morphing corrections back into annual hourly series.

use revive_calendar::{AnalysisWindow, PaddedWindow};

use crate::error::MorphError;
use crate::phase::phase_at;

/// Overwrites `series` inside `window` with `source[h] + delta * sin(pi * h_local / len)`.
///
/// `h_local` counts from the window start and `len` is the window length. Hours
/// outside the window are left as they are in `series`. Reading from `source`
/// rather than `series` keeps successive patches independent of each other.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] if `source` and `series` differ in length
/// and [`MorphError::Calendar`] if the window does not fit the series.
pub fn patch_window(
    series: &mut [f64],
    source: &[f64],
    window: AnalysisWindow,
    delta: f64,
) -> Result<(), MorphError> {
    patch_with_phase(series, source, window, 0, window.len(), delta)
}

/// Patches the expanded hours of `window` with the phase of the nominal padded
/// window, so the peak stays on the middle of the core week even where the
/// padding was clamped at the ends of the year.
///
/// # Errors
///
/// Same as [`patch_window`].
pub fn patch_padded_window(
    series: &mut [f64],
    source: &[f64],
    window: PaddedWindow,
    delta: f64,
) -> Result<(), MorphError> {
    patch_with_phase(
        series,
        source,
        window.expanded(),
        window.nominal_offset(),
        window.nominal_len(),
        delta,
    )
}

fn patch_with_phase(
    series: &mut [f64],
    source: &[f64],
    window: AnalysisWindow,
    offset: usize,
    len: usize,
    delta: f64,
) -> Result<(), MorphError> {
    if source.len() != series.len() {
        return Err(MorphError::LengthMismatch {
            expected: series.len(),
            got: source.len(),
            field: "source".to_string(),
        });
    }
    window.check_within(series.len())?;

    for (h_local, h) in window.range().enumerate() {
        series[h] = source[h] + delta * phase_at(offset + h_local, len);
    }
    Ok(())
}

/// Lowers every dew-point that exceeds the dry-bulb of the same hour to that dry-bulb.
///
/// Returns the number of hours corrected.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] if the series differ in length.
pub fn clamp_dew_point(dew_point: &mut [f64], dry_bulb: &[f64]) -> Result<usize, MorphError> {
    if dew_point.len() != dry_bulb.len() {
        return Err(MorphError::LengthMismatch {
            expected: dry_bulb.len(),
            got: dew_point.len(),
            field: "dew_point".to_string(),
        });
    }
    let mut corrected = 0;
    for (dew, &dry) in dew_point.iter_mut().zip(dry_bulb) {
        if *dew > dry {
            *dew = dry;
            corrected += 1;
        }
    }
    Ok(corrected)
}
