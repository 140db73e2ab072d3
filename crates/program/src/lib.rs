//! Outage-mode program derivation for resiliency simulations.
//!
//! During a power outage the building keeps its occupants and a minimal
//! critical load, ventilation survives only where heat recovery is fitted, and
//! all conditioning systems switch off for the outage window. This crate
//! derives those loads and schedules from a building description, and also
//! provides the base REVIVE residential loads and the lifecycle attribute trait
//! used by materials and equipment.
//!
//! | Module | Provides |
//! |--------|----------|
//! | `outage` | [`OutageRules`], [`derive_outage_loads`] |
//! | `schedule` | [`HourlySchedule`], [`outage_schedules`] |
//! | `residential` | [`residential_loads`] and the REVIVE load formulas |
//! | `attributes` | [`ReviveAttributes`], [`Material`], [`Appliance`], [`HvacEquipment`] |

mod attributes;
mod error;
mod outage;
mod residential;
mod schedule;
pub mod units;

pub use attributes::{Appliance, AttributeTotals, HvacEquipment, Material, ReviveAttributes};
pub use error::ProgramError;
pub use outage::{OutageLoads, OutageRules, Room, RoomVentilation, derive_outage_loads};
pub use residential::{
    ResidentialInputs, ResidentialLoads, calc_lighting_exterior, calc_lighting_garage,
    calc_lighting_interior, calc_mel, calc_occupancy, residential_loads,
};
pub use schedule::{
    BaseSchedules, HourlySchedule, OFF, OutageSchedules, off_windows, outage_schedules,
    switch_off,
};

use revive_calendar::PaddedWindow;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Name given to a program when none is supplied.
pub const DEFAULT_PROGRAM_NAME: &str = "rv2024_Residence_Resilience";

fn default_program_name() -> String {
    DEFAULT_PROGRAM_NAME.to_string()
}

/// Building description read by the program builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Building {
    #[serde(default = "default_program_name")]
    pub program_name: String,
    pub dwellings: u32,
    pub rooms: Vec<Room>,
    /// Appliances kept powered during the outage.
    #[serde(default)]
    pub critical_loads: Vec<Appliance>,
    #[serde(default)]
    pub base_schedules: BaseSchedules,
    /// Inputs for the base residential program, if one should be derived.
    #[serde(default)]
    pub residential: Option<ResidentialInputs>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub hvac_equipment: Vec<HvacEquipment>,
}

/// Everything the resiliency simulation needs from the building program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResiliencyProgram {
    pub name: String,
    pub loads: OutageLoads,
    pub schedules: OutageSchedules,
    /// Base residential loads, when residential inputs were supplied.
    pub base: Option<ResidentialLoads>,
    pub attributes: AttributeTotals,
}

/// Builds the outage-mode program for `building`.
///
/// `outage_windows` are the padded extreme weeks of the resiliency weather
/// record; each is trimmed by the rules' trim hours before systems are switched
/// off.
///
/// # Errors
///
/// Returns [`ProgramError`] for invalid rules, building inputs, schedules or
/// windows.
#[tracing::instrument(
    skip(building, outage_windows, rules),
    fields(program = %building.program_name)
)]
pub fn build_resiliency_program(
    building: &Building,
    outage_windows: &[PaddedWindow],
    n_hours: usize,
    rules: &OutageRules,
) -> Result<ResiliencyProgram, ProgramError> {
    let loads = derive_outage_loads(
        building.dwellings,
        &building.rooms,
        &building.critical_loads,
        rules,
    )?;
    let schedules = outage_schedules(
        &building.base_schedules,
        outage_windows,
        n_hours,
        rules.trim_hours(),
    )?;
    let base = building
        .residential
        .as_ref()
        .map(|inputs| residential_loads(building.dwellings, inputs))
        .transpose()?;

    let attributes = AttributeTotals::sum(&building.materials)?
        .merge(AttributeTotals::sum(&building.critical_loads)?)
        .merge(AttributeTotals::sum(&building.hvac_equipment)?);

    info!(
        people_per_area = loads.people_per_area,
        equipment_watts_per_area = loads.equipment_watts_per_area,
        off_windows = schedules.off_windows.len(),
        "built resiliency program"
    );

    Ok(ResiliencyProgram {
        name: building.program_name.clone(),
        loads,
        schedules,
        base,
        attributes,
    })
}
