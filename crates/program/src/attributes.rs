//! Cost, embodied carbon and service-life attributes carried by model objects.
//!
//! Every object that contributes to a REVIVE lifecycle assessment exposes the
//! same four values through [`ReviveAttributes`], so totals can be summed over
//! heterogeneous collections.

use serde::{Deserialize, Serialize};

use crate::error::{ProgramError, non_negative};

/// Lifecycle attributes shared by materials, appliances and HVAC equipment.
pub trait ReviveAttributes {
    /// Installed cost in the project currency.
    fn cost(&self) -> f64;

    /// Embodied carbon in kg CO2e.
    fn kg_co2(&self) -> f64;

    /// Share of `cost` that is labour, in `0.0..=1.0`.
    fn labor_fraction(&self) -> f64;

    /// Expected service life in years.
    fn lifetime_years(&self) -> u32;

    /// Checks that the attribute values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::InvalidValue`] for a negative or non-finite cost or
    /// CO2 value, or a labour fraction outside `0.0..=1.0`.
    fn validate_attributes(&self) -> Result<(), ProgramError> {
        non_negative("cost", self.cost())?;
        non_negative("kg_co2", self.kg_co2())?;
        let labor = self.labor_fraction();
        if !(0.0..=1.0).contains(&labor) {
            return Err(ProgramError::InvalidValue {
                field: "labor_fraction".to_string(),
                value: labor,
                reason: "must be within 0..=1".to_string(),
            });
        }
        Ok(())
    }
}

/// An opaque construction material applied over an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Material {
    /// Display name.
    pub name: String,
    /// Area the material covers, in m².
    pub area_m2: f64,
    /// Embodied carbon per m² of applied material.
    #[serde(default)]
    pub kg_co2_per_m2: f64,
    /// Installed cost per m².
    #[serde(default)]
    pub cost_per_m2: f64,
    #[serde(default)]
    pub labor_fraction: f64,
    #[serde(default)]
    pub lifetime_years: u32,
}

impl ReviveAttributes for Material {
    fn cost(&self) -> f64 {
        self.cost_per_m2 * self.area_m2
    }

    fn kg_co2(&self) -> f64 {
        self.kg_co2_per_m2 * self.area_m2
    }

    fn labor_fraction(&self) -> f64 {
        self.labor_fraction
    }

    fn lifetime_years(&self) -> u32 {
        self.lifetime_years
    }
}

/// A plug-in appliance. During an outage its `watts` count as critical load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Appliance {
    pub name: String,
    /// Power draw kept running during an outage.
    pub watts: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub labor_fraction: f64,
    #[serde(default)]
    pub lifetime_years: u32,
}

impl ReviveAttributes for Appliance {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn kg_co2(&self) -> f64 {
        0.0
    }

    fn labor_fraction(&self) -> f64 {
        self.labor_fraction
    }

    fn lifetime_years(&self) -> u32 {
        self.lifetime_years
    }
}

/// A piece of heating, cooling or ventilation equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HvacEquipment {
    pub display_name: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub labor_fraction: f64,
    #[serde(default)]
    pub lifetime_years: u32,
}

impl ReviveAttributes for HvacEquipment {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn kg_co2(&self) -> f64 {
        0.0
    }

    fn labor_fraction(&self) -> f64 {
        self.labor_fraction
    }

    fn lifetime_years(&self) -> u32 {
        self.lifetime_years
    }
}

/// Summed attributes over a collection of objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AttributeTotals {
    pub cost: f64,
    pub kg_co2: f64,
    /// Portion of `cost` attributed to labour.
    pub labor_cost: f64,
    pub items: usize,
}

impl AttributeTotals {
    /// Adds one object to the running totals after validating it.
    ///
    /// # Errors
    ///
    /// Propagates [`ReviveAttributes::validate_attributes`] failures.
    pub fn add<A: ReviveAttributes + ?Sized>(&mut self, item: &A) -> Result<(), ProgramError> {
        item.validate_attributes()?;
        let cost = item.cost();
        self.cost += cost;
        self.kg_co2 += item.kg_co2();
        self.labor_cost += cost * item.labor_fraction();
        self.items += 1;
        Ok(())
    }

    /// Totals for every object in `items`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure encountered.
    pub fn sum<'a, A, I>(items: I) -> Result<Self, ProgramError>
    where
        A: ReviveAttributes + 'a,
        I: IntoIterator<Item = &'a A>,
    {
        let mut totals = Self::default();
        for item in items {
            totals.add(item)?;
        }
        Ok(totals)
    }

    /// Combines two sets of totals.
    pub fn merge(self, other: Self) -> Self {
        Self {
            cost: self.cost + other.cost,
            kg_co2: self.kg_co2 + other.kg_co2,
            labor_cost: self.labor_cost + other.labor_cost,
            items: self.items + other.items,
        }
    }
}
