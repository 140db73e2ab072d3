//! # revive-resilience
//!
//! Post-processing of hourly resiliency simulation output into per-zone
//! threshold-crossing series.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `record` | `{Date, Zone, Value}` records |
//! | `reader` | [`ResultReader`] boundary trait and an in-memory source |
//! | `config` | Winter SET thresholds and heat-index bands |
//! | `classify` | Grouping by zone and channel classification |
//! | `summary` | Per-zone totals and JSON output |
//! | `outputs` | Output variables a resiliency run must request |
//! | `error` | Error types |

mod classify;
mod config;
mod error;
mod outputs;
mod reader;
mod record;
mod summary;

pub use classify::{
    ClassifiedHourSeries, ResiliencyChannel, ZoneClassification, classify_summer, classify_winter,
};
pub use config::{ClassifierConfig, HeatIndexBands, WinterThresholds};
pub use error::ResilienceError;
pub use outputs::{
    HEAT_INDEX_VARIABLE, RESILIENCY_OUTPUT_VARIABLES, SET_VARIABLE, render_output_variables,
};
pub use reader::{InMemoryResults, ResultReader};
pub use record::ZoneRecord;
pub use summary::{ResiliencySummary, ZoneSummary, summarize_zones, to_json};

use std::collections::BTreeSet;

use tracing::{info, warn};

/// Winter and summer classifications of one simulation run.
#[derive(Debug, Clone)]
pub struct ResiliencyHours {
    winter: Vec<ZoneClassification>,
    summer: Vec<ZoneClassification>,
}

impl ResiliencyHours {
    /// SET degree-hour series, one entry per zone.
    pub fn winter(&self) -> &[ZoneClassification] {
        &self.winter
    }

    /// Heat-index band series, one entry per zone.
    pub fn summer(&self) -> &[ZoneClassification] {
        &self.summer
    }

    /// Builds the JSON summary.
    pub fn summary(&self, config: &ClassifierConfig) -> ResiliencySummary {
        ResiliencySummary {
            thresholds: config.clone(),
            winter: summarize_zones(&self.winter),
            summer: summarize_zones(&self.summer),
        }
    }
}

/// Keeps only the records of `requested` zones, warning for each requested zone that
/// has none. An empty request keeps everything.
pub fn retain_zones(
    records: Vec<ZoneRecord>,
    requested: &[String],
    variable: &str,
) -> Vec<ZoneRecord> {
    if requested.is_empty() {
        return records;
    }
    let wanted: BTreeSet<&str> = requested.iter().map(String::as_str).collect();
    let present: BTreeSet<&str> = records.iter().map(|r| r.zone.as_str()).collect();
    for zone in wanted.difference(&present) {
        warn!(zone, variable, "no records for requested zone, omitting it");
    }
    let wanted: BTreeSet<String> = wanted.into_iter().map(str::to_string).collect();
    records
        .into_iter()
        .filter(|r| wanted.contains(&r.zone))
        .collect()
}

fn read<R: ResultReader>(
    reader: &R,
    variable: &str,
    requested: &[String],
) -> Result<Vec<ZoneRecord>, ResilienceError> {
    let records = reader
        .hourly_by_zone(variable)
        .map_err(|e| ResilienceError::Reader {
            variable: variable.to_string(),
            source: Box::new(e),
        })?;
    info!(variable, records = records.len(), "read simulation results");
    Ok(retain_zones(records, requested, variable))
}

/// Reads SET and heat-index records through `reader` and classifies both seasons.
///
/// `requested_zones` restricts the output; an empty slice means all zones found.
///
/// # Errors
///
/// Returns [`ResilienceError::Reader`] if the source fails and propagates
/// classification errors.
#[tracing::instrument(skip(reader, config, requested_zones))]
pub fn assess_resiliency<R: ResultReader>(
    reader: &R,
    config: &ClassifierConfig,
    requested_zones: &[String],
) -> Result<ResiliencyHours, ResilienceError> {
    config.validate()?;
    let set_records = read(reader, SET_VARIABLE, requested_zones)?;
    let winter = classify_winter(&set_records, config.winter())?;
    let heat_index_records = read(reader, HEAT_INDEX_VARIABLE, requested_zones)?;
    let summer = classify_summer(&heat_index_records, config.summer())?;
    Ok(ResiliencyHours { winter, summer })
}
