//! Outage-mode loads: occupancy, critical equipment and ventilation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attributes::Appliance;
use crate::error::{ProgramError, non_negative};
use crate::units::M3S_PER_CFM;

/// Rules applied when deriving an outage-mode program.
#[derive(Debug, Clone, PartialEq)]
pub struct OutageRules {
    /// Critical load kept running per dwelling, W (one refrigerator).
    critical_watts_per_dwelling: f64,
    /// Outdoor air per person for rooms with heat-recovery ventilation, CFM.
    vent_cfm_per_person: f64,
    /// Hours removed from each end of an outage window before HVAC switches off.
    trim_hours: usize,
}

impl Default for OutageRules {
    fn default() -> Self {
        Self::new()
    }
}

impl OutageRules {
    /// Creates rules with 33 W per dwelling, 5 CFM per person and 24 trim hours.
    pub fn new() -> Self {
        Self {
            critical_watts_per_dwelling: 33.0,
            vent_cfm_per_person: 5.0,
            trim_hours: 24,
        }
    }

    /// Sets the critical load kept on per dwelling, W.
    pub fn with_critical_watts_per_dwelling(mut self, watts: f64) -> Self {
        self.critical_watts_per_dwelling = watts;
        self
    }

    /// Sets the ventilation rate per person in rooms with heat recovery, CFM.
    pub fn with_vent_cfm_per_person(mut self, cfm: f64) -> Self {
        self.vent_cfm_per_person = cfm;
        self
    }

    /// Sets the hours trimmed from each end of an outage window.
    pub fn with_trim_hours(mut self, hours: usize) -> Self {
        self.trim_hours = hours;
        self
    }

    /// Critical load per dwelling, W.
    pub fn critical_watts_per_dwelling(&self) -> f64 {
        self.critical_watts_per_dwelling
    }

    /// Ventilation rate per person, CFM.
    pub fn vent_cfm_per_person(&self) -> f64 {
        self.vent_cfm_per_person
    }

    /// Hours trimmed from each end of an outage window.
    pub fn trim_hours(&self) -> usize {
        self.trim_hours
    }

    /// Ventilation flow per person in m³/s.
    pub fn vent_m3s_per_person(&self) -> f64 {
        self.vent_cfm_per_person * M3S_PER_CFM
    }

    /// Validates the rules.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::InvalidConfig`] if a rate is negative or not finite.
    pub fn validate(&self) -> Result<(), ProgramError> {
        for (name, value) in [
            ("critical_watts_per_dwelling", self.critical_watts_per_dwelling),
            ("vent_cfm_per_person", self.vent_cfm_per_person),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProgramError::InvalidConfig {
                    reason: format!("{name} must be finite and >= 0, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// One conditioned room of the building model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Room {
    pub name: String,
    pub floor_area_m2: f64,
    /// Occupant density of the base program, people per m².
    #[serde(default)]
    pub people_per_area: f64,
    /// Infiltration per m² of exterior surface, m³/s. Kept as-is during an outage.
    #[serde(default)]
    pub infiltration_m3s_per_m2: f64,
    /// Whether the room is served by heat-recovery ventilation.
    #[serde(default)]
    pub has_hrv: bool,
}

/// Ventilation assigned to one room for the outage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomVentilation {
    pub name: String,
    pub flow_per_person_m3s: f64,
    pub infiltration_m3s_per_m2: f64,
}

/// Building-wide outage loads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutageLoads {
    pub total_floor_area_m2: f64,
    pub total_occupancy: f64,
    /// Occupant density held at the base program's average.
    pub people_per_area: f64,
    /// Critical equipment load, W.
    pub critical_watts: f64,
    /// Critical equipment density, W/m².
    pub equipment_watts_per_area: f64,
    pub rooms: Vec<RoomVentilation>,
}

/// Derives outage loads for `rooms`.
///
/// Occupancy is the sum of each room's density times its area. The critical
/// load is the per-dwelling allowance plus every critical appliance. Rooms
/// with heat-recovery ventilation get the per-person outdoor air rate; all
/// others get none.
///
/// # Errors
///
/// Returns [`ProgramError::NoDwellings`], [`ProgramError::ZeroFloorArea`] or
/// [`ProgramError::InvalidValue`] for unusable inputs.
pub fn derive_outage_loads(
    dwellings: u32,
    rooms: &[Room],
    critical_loads: &[Appliance],
    rules: &OutageRules,
) -> Result<OutageLoads, ProgramError> {
    rules.validate()?;
    if dwellings == 0 {
        return Err(ProgramError::NoDwellings);
    }

    let mut total_area = 0.0;
    let mut total_occupancy = 0.0;
    for room in rooms {
        let area = non_negative("floor_area_m2", room.floor_area_m2)?;
        let density = non_negative("people_per_area", room.people_per_area)?;
        total_area += area;
        total_occupancy += density * area;
    }
    if total_area <= 0.0 {
        return Err(ProgramError::ZeroFloorArea);
    }

    let mut critical_watts = rules.critical_watts_per_dwelling() * dwellings as f64;
    for appliance in critical_loads {
        critical_watts += non_negative("watts", appliance.watts)?;
    }

    let hrv_flow = rules.vent_m3s_per_person();
    let room_vent: Vec<RoomVentilation> = rooms
        .iter()
        .map(|room| RoomVentilation {
            name: room.name.clone(),
            flow_per_person_m3s: if room.has_hrv { hrv_flow } else { 0.0 },
            infiltration_m3s_per_m2: room.infiltration_m3s_per_m2,
        })
        .collect();

    debug!(total_area, total_occupancy, critical_watts, "derived outage loads");

    Ok(OutageLoads {
        total_floor_area_m2: total_area,
        total_occupancy,
        people_per_area: total_occupancy / total_area,
        critical_watts,
        equipment_watts_per_area: critical_watts / total_area,
        rooms: room_vent,
    })
}
