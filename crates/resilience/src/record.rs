//! Raw per-zone hourly records read from simulation output.

use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use revive_calendar::{DateHour, YearKind};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ResilienceError;

/// One hourly value of one output variable for one zone.
///
/// Serialised as `{"Date": <ms since epoch>, "Zone": <name>, "Value": <number>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Milliseconds since the Unix epoch, UTC.
    #[serde(rename = "Date", deserialize_with = "deserialize_millis")]
    pub timestamp_ms: i64,
    /// Zone identifier.
    #[serde(rename = "Zone")]
    pub zone: String,
    /// Raw value (SET or heat index, degrees C).
    #[serde(rename = "Value")]
    pub value: f64,
}

/// Accepts integer or floating-point millisecond timestamps.
fn deserialize_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let ms = f64::deserialize(deserializer)?;
    Ok(ms.round() as i64)
}

impl ZoneRecord {
    /// Creates a record.
    pub fn new(timestamp_ms: i64, zone: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp_ms,
            zone: zone.into(),
            value,
        }
    }

    /// Calendar position of the record, ignoring minutes, and the kind of its year.
    ///
    /// # Errors
    ///
    /// Returns [`ResilienceError::InvalidTimestamp`] if the timestamp is out of range.
    pub fn date_hour(&self) -> Result<(DateHour, YearKind), ResilienceError> {
        let invalid = || ResilienceError::InvalidTimestamp {
            timestamp_ms: self.timestamp_ms,
            zone: self.zone.clone(),
        };
        let dt = DateTime::from_timestamp_millis(self.timestamp_ms).ok_or_else(invalid)?;
        let year = if NaiveDate::from_ymd_opt(dt.year(), 2, 29).is_some() {
            YearKind::Leap
        } else {
            YearKind::Standard
        };
        let dh = DateHour::new(dt.month() as u8, dt.day() as u8, dt.hour() as u8, year)?;
        Ok((dh, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2017-01-01T00:00:00Z
    const JAN_1_2017_MS: i64 = 1_483_228_800_000;

    #[test]
    fn deserializes_energyplus_shape() {
        let json = r#"[{"Date": 1483228800000, "Zone": "LIVING", "Value": 14.5},
                       {"Date": 1483232400000.0, "Zone": "BED", "Value": 9.25}]"#;
        let records: Vec<ZoneRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ZoneRecord::new(JAN_1_2017_MS, "LIVING", 14.5));
        assert_eq!(records[1].timestamp_ms, JAN_1_2017_MS + 3_600_000);
    }

    #[test]
    fn serializes_with_original_keys() {
        let json = serde_json::to_string(&ZoneRecord::new(0, "Z1", 1.0)).unwrap();
        assert_eq!(json, r#"{"Date":0,"Zone":"Z1","Value":1.0}"#);
    }

    #[test]
    fn date_hour_of_new_year() {
        let (dh, year) = ZoneRecord::new(JAN_1_2017_MS, "Z", 0.0).date_hour().unwrap();
        assert_eq!(year, YearKind::Standard);
        assert_eq!(dh.hour_of_year(year), 0);
    }

    #[test]
    fn date_hour_ignores_minutes() {
        let ms = JAN_1_2017_MS + 5 * 3_600_000 + 30 * 60_000;
        let (dh, _) = ZoneRecord::new(ms, "Z", 0.0).date_hour().unwrap();
        assert_eq!((dh.month(), dh.day(), dh.hour()), (1, 1, 5));
    }

    #[test]
    fn date_hour_leap_year() {
        // 2020-03-01T00:00:00Z
        let (dh, year) = ZoneRecord::new(1_583_020_800_000, "Z", 0.0)
            .date_hour()
            .unwrap();
        assert_eq!(year, YearKind::Leap);
        assert_eq!(dh.hour_of_year(year), 60 * 24);
    }

    #[test]
    fn date_hour_out_of_range() {
        assert!(matches!(
            ZoneRecord::new(i64::MAX, "Z", 0.0).date_hour(),
            Err(ResilienceError::InvalidTimestamp { .. })
        ));
    }
}
