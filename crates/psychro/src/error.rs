//! Error types for the revive-psychro crate.

/// Errors raised by the psychrometric functions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PsychroError {
    /// An input was NaN or infinite.
    #[error("non-finite input for '{name}': {value}")]
    NonFinite {
        /// Name of the offending input.
        name: &'static str,
        /// The value supplied.
        value: f64,
    },

    /// A temperature at or below absolute zero.
    #[error("temperature {celsius} C is at or below absolute zero")]
    BelowAbsoluteZero {
        /// The temperature supplied, in degrees Celsius.
        celsius: f64,
    },

    /// Relative humidity outside 0..=100 %.
    #[error("relative humidity {value} % outside 0..=100")]
    RelativeHumidityOutOfRange {
        /// The relative humidity supplied.
        value: f64,
    },

    /// The dry/wet-bulb pair implies a non-positive water vapour pressure.
    #[error(
        "wet-bulb {wet_bulb} C is too low for dry-bulb {dry_bulb} C (vapour pressure {vapor_pressure:.1} Pa)"
    )]
    NonPositiveVaporPressure {
        /// Dry-bulb temperature, degrees Celsius.
        dry_bulb: f64,
        /// Wet-bulb temperature, degrees Celsius.
        wet_bulb: f64,
        /// Computed partial vapour pressure, Pa.
        vapor_pressure: f64,
    },
}

/// Rejects NaN and infinite inputs.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, PsychroError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PsychroError::NonFinite { name, value })
    }
}
