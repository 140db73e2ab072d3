//! # revive-psychro
//!
//! Stateless psychrometric functions used to derive dew-point return extremes
//! from dry-bulb / mean-coincident wet-bulb design data.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `saturation` | Saturation vapour pressure over ice and water |
//! | `humidity` | Relative humidity from wet-bulb, dew-point from RH |
//! | `pressure` | Air pressure from elevation |
//! | `error` | Error types |

mod error;
mod humidity;
mod pressure;
mod saturation;

pub use error::PsychroError;
pub use humidity::{DRY_AIR_DEW_POINT_C, dew_point_from_db_rh, rel_humid_from_db_wb};
pub use pressure::{STANDARD_PRESSURE_PA, air_pressure_from_elevation};
pub use saturation::{KELVIN_OFFSET, saturated_vapor_pressure};

/// Result of a dry-bulb / wet-bulb dew-point calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewPointCalc {
    dry_bulb: f64,
    dew_point: f64,
    rel_humidity: f64,
    pressure_pa: f64,
}

impl DewPointCalc {
    /// Dry-bulb temperature, C (echo of the input).
    pub fn dry_bulb(&self) -> f64 {
        self.dry_bulb
    }

    /// Dew-point temperature, C.
    pub fn dew_point(&self) -> f64 {
        self.dew_point
    }

    /// Relative humidity, %.
    pub fn rel_humidity(&self) -> f64 {
        self.rel_humidity
    }

    /// Air pressure used, Pa.
    pub fn pressure_pa(&self) -> f64 {
        self.pressure_pa
    }
}

/// Computes dew-point, relative humidity and air pressure from dry-bulb and
/// wet-bulb temperatures (C) and an optional site elevation (m).
///
/// # Errors
///
/// Propagates any [`PsychroError`] from the underlying functions.
pub fn calculate_dew_point(
    dry_bulb: f64,
    wet_bulb: f64,
    elevation_m: Option<f64>,
) -> Result<DewPointCalc, PsychroError> {
    let pressure_pa = air_pressure_from_elevation(elevation_m)?;
    let rel_humidity = rel_humid_from_db_wb(dry_bulb, wet_bulb, pressure_pa)?.min(100.0);
    let dew_point = dew_point_from_db_rh(dry_bulb, rel_humidity)?;
    Ok(DewPointCalc {
        dry_bulb,
        dew_point,
        rel_humidity,
        pressure_pa,
    })
}
