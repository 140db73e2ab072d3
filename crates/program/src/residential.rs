//! Base (non-outage) REVIVE residential program loads.
//!
//! Miscellaneous electric load, lighting and occupancy are derived from the
//! dwelling count, bedroom count and interior conditioned floor area (iCFA),
//! then normalised to per-area values for the energy model program.

use serde::{Deserialize, Serialize};

use crate::error::{ProgramError, non_negative};
use crate::units::FT2_PER_M2;

/// Default fraction of high-efficacy lighting fixtures.
pub const DEFAULT_HIGH_EFFICACY_FRACTION: f64 = 1.0;

/// Usage factor applied to every REVIVE residential load.
pub const RESIDENTIAL_LOAD_FACTOR: f64 = 0.8;

fn default_he_fraction() -> f64 {
    DEFAULT_HIGH_EFFICACY_FRACTION
}

/// Miscellaneous electric load, W.
pub fn calc_mel(dwellings: u32, icfa_ft2: f64, bedrooms: u32) -> f64 {
    (413.0 * dwellings as f64 + 0.91 * icfa_ft2 + 69.0 * bedrooms as f64)
        * RESIDENTIAL_LOAD_FACTOR
}

/// Interior lighting load, W.
pub fn calc_lighting_interior(dwellings: u32, icfa_ft2: f64, he_fraction: f64) -> f64 {
    let efficacy = 0.2 + 0.8 * (4.0 - 3.0 * he_fraction) / 3.7;
    efficacy * (455.0 * dwellings as f64 + 0.8 * icfa_ft2) * RESIDENTIAL_LOAD_FACTOR
}

/// Exterior lighting load, W.
pub fn calc_lighting_exterior(dwellings: u32, icfa_ft2: f64, he_fraction: f64) -> f64 {
    (1.0 - 0.75 * he_fraction) * (100.0 * dwellings as f64 + 0.05 * icfa_ft2)
        * RESIDENTIAL_LOAD_FACTOR
}

/// Garage lighting load, W.
pub fn calc_lighting_garage(dwellings: u32, he_fraction: f64) -> f64 {
    dwellings as f64
        * (100.0 * (1.0 - he_fraction) + 25.0 * he_fraction)
        * RESIDENTIAL_LOAD_FACTOR
}

/// Number of occupants: one more than the bedroom count per dwelling.
///
/// # Errors
///
/// Returns [`ProgramError::NoDwellings`] when `dwellings` is zero.
pub fn calc_occupancy(dwellings: u32, bedrooms: u32) -> Result<f64, ProgramError> {
    if dwellings == 0 {
        return Err(ProgramError::NoDwellings);
    }
    let d = dwellings as f64;
    Ok((bedrooms as f64 / d + 1.0) * d)
}

/// Inputs for the base residential program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResidentialInputs {
    /// Interior conditioned floor area, m².
    pub icfa_m2: f64,
    pub bedrooms: u32,
    #[serde(default = "default_he_fraction")]
    pub interior_he_fraction: f64,
    #[serde(default = "default_he_fraction")]
    pub exterior_he_fraction: f64,
    #[serde(default = "default_he_fraction")]
    pub garage_he_fraction: f64,
}

impl ResidentialInputs {
    /// Creates inputs with every lighting fixture high-efficacy.
    pub fn new(icfa_m2: f64, bedrooms: u32) -> Self {
        Self {
            icfa_m2,
            bedrooms,
            interior_he_fraction: DEFAULT_HIGH_EFFICACY_FRACTION,
            exterior_he_fraction: DEFAULT_HIGH_EFFICACY_FRACTION,
            garage_he_fraction: DEFAULT_HIGH_EFFICACY_FRACTION,
        }
    }

    fn validate(&self) -> Result<(), ProgramError> {
        if !self.icfa_m2.is_finite() || self.icfa_m2 <= 0.0 {
            return Err(ProgramError::ZeroFloorArea);
        }
        for (field, f) in [
            ("interior_he_fraction", self.interior_he_fraction),
            ("exterior_he_fraction", self.exterior_he_fraction),
            ("garage_he_fraction", self.garage_he_fraction),
        ] {
            if !(0.0..=1.0).contains(&non_negative(field, f)?) {
                return Err(ProgramError::InvalidValue {
                    field: field.to_string(),
                    value: f,
                    reason: "must be within 0..=1".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Base program loads for a residential building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidentialLoads {
    pub mel_watts: f64,
    pub lighting_interior_watts: f64,
    pub lighting_exterior_watts: f64,
    pub lighting_garage_watts: f64,
    pub occupancy: f64,
    /// Electric equipment density, W/m² of iCFA.
    pub equipment_watts_per_area: f64,
    /// Interior lighting density, W/m² of iCFA.
    pub lighting_watts_per_area: f64,
    /// Floor area per occupant, m².
    pub area_per_person: f64,
}

/// Computes the base residential loads.
///
/// # Errors
///
/// Returns [`ProgramError::NoDwellings`] for zero dwellings,
/// [`ProgramError::ZeroFloorArea`] for a non-positive iCFA, and
/// [`ProgramError::InvalidValue`] for a fixture fraction outside `0..=1`.
pub fn residential_loads(
    dwellings: u32,
    inputs: &ResidentialInputs,
) -> Result<ResidentialLoads, ProgramError> {
    inputs.validate()?;
    let occupancy = calc_occupancy(dwellings, inputs.bedrooms)?;
    let icfa_ft2 = inputs.icfa_m2 * FT2_PER_M2;

    let mel_watts = calc_mel(dwellings, icfa_ft2, inputs.bedrooms);
    let lighting_interior_watts =
        calc_lighting_interior(dwellings, icfa_ft2, inputs.interior_he_fraction);

    Ok(ResidentialLoads {
        mel_watts,
        lighting_interior_watts,
        lighting_exterior_watts: calc_lighting_exterior(
            dwellings,
            icfa_ft2,
            inputs.exterior_he_fraction,
        ),
        lighting_garage_watts: calc_lighting_garage(dwellings, inputs.garage_he_fraction),
        occupancy,
        equipment_watts_per_area: mel_watts / inputs.icfa_m2,
        lighting_watts_per_area: lighting_interior_watts / inputs.icfa_m2,
        area_per_person: inputs.icfa_m2 / occupancy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mel_single_family() {
        // 1 dwelling, 1000 ft2, 2 bedrooms
        assert_relative_eq!(calc_mel(1, 1000.0, 2), (413.0 + 910.0 + 138.0) * 0.8);
    }

    #[test]
    fn interior_lighting_all_high_efficacy() {
        let expected = (0.2 + 0.8 / 3.7) * (455.0 + 800.0) * 0.8;
        assert_relative_eq!(calc_lighting_interior(1, 1000.0, 1.0), expected);
    }

    #[test]
    fn exterior_and_garage_lighting() {
        assert_relative_eq!(calc_lighting_exterior(1, 1000.0, 1.0), 0.25 * 150.0 * 0.8);
        assert_relative_eq!(calc_lighting_exterior(1, 1000.0, 0.0), 150.0 * 0.8);
        assert_relative_eq!(calc_lighting_garage(2, 1.0), 2.0 * 25.0 * 0.8);
        assert_relative_eq!(calc_lighting_garage(2, 0.0), 2.0 * 100.0 * 0.8);
    }

    #[test]
    fn occupancy() {
        assert_relative_eq!(calc_occupancy(1, 3).unwrap(), 4.0);
        assert_relative_eq!(calc_occupancy(4, 8).unwrap(), 12.0);
        assert_eq!(calc_occupancy(0, 3), Err(ProgramError::NoDwellings));
    }

    #[test]
    fn loads_are_normalised_by_icfa() {
        let inputs = ResidentialInputs::new(100.0, 2);
        let loads = residential_loads(1, &inputs).unwrap();
        assert_relative_eq!(loads.occupancy, 3.0);
        assert_relative_eq!(loads.area_per_person, 100.0 / 3.0);
        assert_relative_eq!(loads.equipment_watts_per_area, loads.mel_watts / 100.0);
        assert_relative_eq!(
            loads.lighting_watts_per_area,
            loads.lighting_interior_watts / 100.0
        );
    }

    #[test]
    fn zero_icfa_rejected() {
        let inputs = ResidentialInputs::new(0.0, 2);
        assert_eq!(residential_loads(1, &inputs), Err(ProgramError::ZeroFloorArea));
    }

    #[test]
    fn fraction_out_of_range_rejected() {
        let mut inputs = ResidentialInputs::new(100.0, 2);
        inputs.garage_he_fraction = 1.5;
        assert!(matches!(
            residential_loads(1, &inputs),
            Err(ProgramError::InvalidValue { .. })
        ));
    }
}
