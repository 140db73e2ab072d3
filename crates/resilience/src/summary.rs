//! JSON summary of classified resiliency hours.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::ZoneClassification;
use crate::config::ClassifierConfig;
use crate::error::ResilienceError;

/// Totals for one zone.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneSummary {
    pub zone: String,
    pub hours: usize,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    /// channel key -> degree-hours (winter) or hour count (summer)
    pub totals: BTreeMap<String, f64>,
}

/// Top-level resiliency summary.
#[derive(Debug, Clone, Serialize)]
pub struct ResiliencySummary {
    pub thresholds: ClassifierConfig,
    pub winter: Vec<ZoneSummary>,
    pub summer: Vec<ZoneSummary>,
}

/// Collapses each zone's series into channel totals.
pub fn summarize_zones(zones: &[ZoneClassification]) -> Vec<ZoneSummary> {
    zones
        .iter()
        .map(|z| {
            let first = z.series().first();
            let period = first.and_then(|s| s.period());
            ZoneSummary {
                zone: z.zone().to_string(),
                hours: first.map_or(0, |s| s.len()),
                period_start: period.map(|(start, _)| start.to_string()),
                period_end: period.map(|(_, end)| end.to_string()),
                totals: z
                    .series()
                    .iter()
                    .map(|s| (s.channel().key().to_string(), s.total()))
                    .collect(),
            }
        })
        .collect()
}

/// Serialize a resiliency summary to a JSON string.
pub fn to_json(summary: &ResiliencySummary) -> Result<String, ResilienceError> {
    serde_json::to_string_pretty(summary).map_err(|e| ResilienceError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::classify::{classify_summer, classify_winter};
    use crate::config::WinterThresholds;
    use crate::record::ZoneRecord;

    const T0: i64 = 1_483_228_800_000;
    const HOUR_MS: i64 = 3_600_000;

    #[test]
    fn totals_per_zone() {
        let records: Vec<ZoneRecord> = (0..5)
            .map(|h| ZoneRecord::new(T0 + h * HOUR_MS, "Z1", 10.0))
            .collect();
        let zones = classify_winter(&records, &WinterThresholds::default()).unwrap();
        let summary = summarize_zones(&zones);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].hours, 5);
        let upper = summary[0].totals["set_degree_hours_below_upper"];
        assert_relative_eq!(upper, 5.0 * 2.222_22, epsilon = 1e-9);
        assert_eq!(summary[0].totals["set_degree_hours_below_lower"], 0.0);
        assert_eq!(summary[0].period_start.as_deref(), Some("Jan  1 00:00"));
        assert_eq!(summary[0].period_end.as_deref(), Some("Jan  1 04:00"));
    }

    #[test]
    fn to_json_contains_sections() {
        let records = [
            ZoneRecord::new(T0, "Z1", 30.0),
            ZoneRecord::new(T0 + HOUR_MS, "Z1", 45.0),
        ];
        let config = ClassifierConfig::default();
        let summer = classify_summer(&records, config.summer()).unwrap();
        let summary = ResiliencySummary {
            thresholds: config,
            winter: vec![],
            summer: summarize_zones(&summer),
        };
        let json = to_json(&summary).unwrap();
        assert!(json.contains("\"thresholds\""));
        assert!(json.contains("\"heat_index_caution_hours\": 1.0"));
        assert!(json.contains("\"heat_index_danger_hours\": 1.0"));
        assert!(json.contains("\"zone\": \"Z1\""));
    }
}
