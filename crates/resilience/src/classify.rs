//! Per-zone threshold classification of hourly records.

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;
use revive_calendar::{AnalysisWindow, DateHour, YearKind};
use tracing::debug;

use crate::config::{HeatIndexBands, WinterThresholds};
use crate::error::ResilienceError;
use crate::record::ZoneRecord;

/// One classification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResiliencyChannel {
    /// Degree-hours of SET below the upper winter threshold.
    DegreeHoursBelowUpper,
    /// Degree-hours of SET below the lower winter threshold.
    DegreeHoursBelowLower,
    /// Heat index in the caution band.
    Caution,
    /// Heat index in the warning band.
    Warning,
    /// Heat index in the danger band.
    Danger,
    /// Heat index in the extreme-danger band.
    ExtremeDanger,
}

impl ResiliencyChannel {
    /// Winter channels, in output order.
    pub const WINTER: [Self; 2] = [Self::DegreeHoursBelowUpper, Self::DegreeHoursBelowLower];

    /// Summer channels, in output order.
    pub const SUMMER: [Self; 4] = [Self::Caution, Self::Warning, Self::Danger, Self::ExtremeDanger];

    /// Snake-case identifier used in output files.
    pub fn key(self) -> &'static str {
        match self {
            Self::DegreeHoursBelowUpper => "set_degree_hours_below_upper",
            Self::DegreeHoursBelowLower => "set_degree_hours_below_lower",
            Self::Caution => "heat_index_caution_hours",
            Self::Warning => "heat_index_warning_hours",
            Self::Danger => "heat_index_danger_hours",
            Self::ExtremeDanger => "heat_index_extreme_danger_hours",
        }
    }

    /// Unit of the classified values.
    pub fn unit(self) -> &'static str {
        match self {
            Self::DegreeHoursBelowUpper | Self::DegreeHoursBelowLower => "dC",
            _ => "fraction",
        }
    }
}

impl fmt::Display for ResiliencyChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A zone's classified values for one channel, ordered by time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedHourSeries {
    zone: String,
    channel: ResiliencyChannel,
    year: YearKind,
    timestamps: Vec<DateHour>,
    values: Vec<f64>,
}

impl ClassifiedHourSeries {
    /// Zone identifier.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Classification channel.
    pub fn channel(&self) -> ResiliencyChannel {
        self.channel
    }

    /// Year kind of the timestamps.
    pub fn year(&self) -> YearKind {
        self.year
    }

    /// Hourly timestamps, ascending.
    pub fn timestamps(&self) -> &[DateHour] {
        &self.timestamps
    }

    /// Classified values, aligned with [`timestamps`](Self::timestamps).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of hours.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no hours.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all values: degree-hours for winter, hour count for summer.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// First and last observed hour.
    pub fn period(&self) -> Option<(DateHour, DateHour)> {
        Some((*self.timestamps.first()?, *self.timestamps.last()?))
    }

    /// Window from the first to the last observed hour, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ResilienceError::Calendar`] if the series is empty.
    pub fn window(&self) -> Result<AnalysisWindow, ResilienceError> {
        let (first, last) = self
            .period()
            .ok_or(revive_calendar::CalendarError::InvalidWindow { start: 0, end: 0 })?;
        Ok(AnalysisWindow::new(
            first.hour_of_year(self.year),
            last.hour_of_year(self.year) + 1,
        )?)
    }
}

/// All classified series of one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneClassification {
    zone: String,
    series: Vec<ClassifiedHourSeries>,
}

impl ZoneClassification {
    /// Zone identifier.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Series in channel order.
    pub fn series(&self) -> &[ClassifiedHourSeries] {
        &self.series
    }

    /// Series for `channel`, if it was produced.
    pub fn get(&self, channel: ResiliencyChannel) -> Option<&ClassifiedHourSeries> {
        self.series.iter().find(|s| s.channel == channel)
    }
}

/// A zone's raw hourly timeline.
struct ZoneTimeline {
    zone: String,
    year: YearKind,
    timestamps: Vec<DateHour>,
    values: Vec<f64>,
}

/// Groups records by zone (lexicographic) and orders each zone's hours by timestamp.
fn group_by_zone(records: &[ZoneRecord]) -> Result<Vec<ZoneTimeline>, ResilienceError> {
    let mut by_zone: BTreeMap<&str, Vec<&ZoneRecord>> = BTreeMap::new();
    for record in records {
        if !record.value.is_finite() {
            return Err(ResilienceError::NonFinite {
                zone: record.zone.clone(),
                timestamp_ms: record.timestamp_ms,
            });
        }
        by_zone.entry(record.zone.as_str()).or_default().push(record);
    }

    let mut timelines = Vec::with_capacity(by_zone.len());
    for (zone, mut zone_records) in by_zone {
        zone_records.sort_by_key(|r| r.timestamp_ms);
        let mut year = YearKind::Standard;
        let mut timestamps = Vec::with_capacity(zone_records.len());
        let mut values = Vec::with_capacity(zone_records.len());
        for r in zone_records {
            let (dh, y) = r.date_hour()?;
            year = y;
            timestamps.push(dh);
            values.push(r.value);
        }
        timelines.push(ZoneTimeline {
            zone: zone.to_string(),
            year,
            timestamps,
            values,
        });
    }
    Ok(timelines)
}

fn classify<F>(
    records: &[ZoneRecord],
    channels: &[ResiliencyChannel],
    rule: F,
) -> Result<Vec<ZoneClassification>, ResilienceError>
where
    F: Fn(ResiliencyChannel, f64) -> f64 + Sync,
{
    let timelines = group_by_zone(records)?;
    let zones: Vec<ZoneClassification> = timelines
        .par_iter()
        .map(|t| ZoneClassification {
            zone: t.zone.clone(),
            series: channels
                .iter()
                .map(|&channel| ClassifiedHourSeries {
                    zone: t.zone.clone(),
                    channel,
                    year: t.year,
                    timestamps: t.timestamps.clone(),
                    values: t.values.iter().map(|&v| rule(channel, v)).collect(),
                })
                .collect(),
        })
        .collect();
    debug!(zones = zones.len(), records = records.len(), "classified");
    Ok(zones)
}

/// Winter degree-hours below each SET threshold: `max(threshold - value, 0)`.
///
/// # Errors
///
/// Returns [`ResilienceError`] for invalid thresholds, non-finite values or
/// unrepresentable timestamps.
pub fn classify_winter(
    records: &[ZoneRecord],
    thresholds: &WinterThresholds,
) -> Result<Vec<ZoneClassification>, ResilienceError> {
    thresholds.validate()?;
    let (upper, lower) = (thresholds.upper_c(), thresholds.lower_c());
    classify(records, &ResiliencyChannel::WINTER, |channel, v| {
        let threshold = match channel {
            ResiliencyChannel::DegreeHoursBelowLower => lower,
            _ => upper,
        };
        (threshold - v).max(0.0)
    })
}

/// Summer heat-index band flags (1.0 inside the band, else 0.0).
///
/// Bands are half-open `[lower, next_lower)`, the top band unbounded, so an hour at
/// or above the caution bound is flagged in exactly one band.
///
/// # Errors
///
/// Returns [`ResilienceError`] for invalid bands, non-finite values or
/// unrepresentable timestamps.
pub fn classify_summer(
    records: &[ZoneRecord],
    bands: &HeatIndexBands,
) -> Result<Vec<ZoneClassification>, ResilienceError> {
    bands.validate()?;
    let bands = bands.clone();
    classify(records, &ResiliencyChannel::SUMMER, move |channel, v| {
        let (lower, upper) = match channel {
            ResiliencyChannel::Caution => (bands.caution_c(), bands.warning_c()),
            ResiliencyChannel::Warning => (bands.warning_c(), bands.danger_c()),
            ResiliencyChannel::Danger => (bands.danger_c(), bands.extreme_danger_c()),
            _ => (bands.extreme_danger_c(), f64::INFINITY),
        };
        if v >= lower && v < upper { 1.0 } else { 0.0 }
    })
}
