//! Resiliency weather morphing.
//!
//! This crate turns a typical-year hourly record into a resiliency weather record by
//! pushing the extreme cold and hot weeks towards n-year return values.
//!
//! # Pipeline Order
//!
//! 1. **Locate**: validate both 168-hour extreme weeks and pad them by a day
//! 2. **Iterate**: find the half-sine amplitude for each season and channel
//! 3. **Patch**: write the four corrections into the annual series
//! 4. **Clamp**: keep dew-point at or below dry-bulb

mod config;
mod error;
mod extreme_week;
mod iterate;
mod patch;
mod phase;
mod result;

pub use config::{MorphConfig, PatchExtent, ReturnExtremes};
pub use error::MorphError;
pub use extreme_week::{ExtremeWeek, ExtremeWeeks, Season, locate_extreme_weeks};
pub use iterate::{Channel, Extremum, MorphTarget, morph_week};
pub use patch::{clamp_dew_point, patch_padded_window, patch_window};
pub use phase::half_sine_phase;
pub use result::{MorphFactors, MorphResult, ResiliencyWeather};

use error::check_finite;
use tracing::{debug, info, warn};

/// Computes one factor from the extreme week of `source` and patches it into `out`.
fn morph_and_patch(
    out: &mut [f64],
    source: &[f64],
    week: &ExtremeWeek,
    channel: Channel,
    extremes: &ReturnExtremes,
    config: &MorphConfig,
) -> Result<MorphResult, MorphError> {
    let season = week.season();
    let target = MorphTarget::new(extremes.get(season, channel)?, season.extremum());
    let result = morph_week(&target, &source[week.core().range()], config)?;
    info!(
        %season,
        %channel,
        delta = result.delta(),
        iterations = result.iterations(),
        "morphing factor"
    );

    match config.patch_extent() {
        PatchExtent::Expanded => patch_padded_window(out, source, week.padded(), result.delta())?,
        PatchExtent::Core => patch_window(out, source, week.core(), result.delta())?,
    }
    Ok(result)
}

/// Applies the full morphing pipeline to an annual dry-bulb / dew-point record.
///
/// Pipeline order: **iterate -> patch -> clamp**, for winter then summer, dry-bulb
/// then dew-point. Every patch reads the unmorphed input, so if the two weeks
/// overlap the summer correction wins on the shared hours.
///
/// # Arguments
///
/// * `dry_bulb`: Annual hourly dry-bulb, degrees C.
/// * `dew_point`: Annual hourly dew-point, degrees C.
/// * `weeks`: Extreme weeks from [`locate_extreme_weeks`].
/// * `extremes`: The four n-year return values.
/// * `config`: Pipeline configuration.
///
/// # Errors
///
/// Returns [`MorphError`] on missing return values, mismatched or non-finite series,
/// weeks outside the record, or an invalid configuration. Non-convergence is not
/// an error.
#[tracing::instrument(skip(dry_bulb, dew_point, weeks, extremes, config))]
pub fn morph_weather(
    dry_bulb: &[f64],
    dew_point: &[f64],
    weeks: &ExtremeWeeks,
    extremes: &ReturnExtremes,
    config: &MorphConfig,
) -> Result<ResiliencyWeather, MorphError> {
    config.validate()?;
    extremes.validate()?;

    // --- Input validation ---
    let n = dry_bulb.len();
    if n == 0 {
        return Err(MorphError::EmptyData {
            field: "dry_bulb".to_string(),
        });
    }
    if dew_point.len() != n {
        return Err(MorphError::LengthMismatch {
            expected: n,
            got: dew_point.len(),
            field: "dew_point".to_string(),
        });
    }
    check_finite(dry_bulb, "dry_bulb")?;
    check_finite(dew_point, "dew_point")?;
    for season in [Season::Winter, Season::Summer] {
        weeks.get(season).expanded().check_within(n)?;
    }
    if weeks.winter().expanded().overlaps(&weeks.summer().expanded()) {
        warn!(
            winter = %weeks.winter().expanded(),
            summer = %weeks.summer().expanded(),
            "extreme weeks overlap; summer correction takes the shared hours"
        );
    }

    // --- Iterate and patch ---
    let mut new_dry_bulb = dry_bulb.to_vec();
    let mut new_dew_point = dew_point.to_vec();
    let winter = weeks.winter();
    let summer = weeks.summer();

    let winter_dry_bulb = morph_and_patch(
        &mut new_dry_bulb,
        dry_bulb,
        winter,
        Channel::DryBulb,
        extremes,
        config,
    )?;
    let winter_dew_point = morph_and_patch(
        &mut new_dew_point,
        dew_point,
        winter,
        Channel::DewPoint,
        extremes,
        config,
    )?;
    let summer_dry_bulb = morph_and_patch(
        &mut new_dry_bulb,
        dry_bulb,
        summer,
        Channel::DryBulb,
        extremes,
        config,
    )?;
    let summer_dew_point = morph_and_patch(
        &mut new_dew_point,
        dew_point,
        summer,
        Channel::DewPoint,
        extremes,
        config,
    )?;

    // --- Clamp ---
    let corrections = clamp_dew_point(&mut new_dew_point, &new_dry_bulb)?;
    debug!(corrections, "dew-point clamped to dry-bulb");

    let factors = MorphFactors {
        winter_dry_bulb,
        winter_dew_point,
        summer_dry_bulb,
        summer_dew_point,
    };
    Ok(ResiliencyWeather::new(
        new_dry_bulb,
        new_dew_point,
        factors,
        *weeks,
        corrections,
    ))
}
