//! Source of hourly per-zone simulation results.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::record::ZoneRecord;

/// Anything that can deliver the hourly records of one output variable for all zones.
///
/// Implementations live at the I/O boundary (JSON files, an extractor process);
/// the classifier only sees records.
pub trait ResultReader {
    /// Failure type of the source.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every hourly record of `variable`, all zones, whole run period.
    fn hourly_by_zone(&self, variable: &str) -> Result<Vec<ZoneRecord>, Self::Error>;
}

/// Records held in memory, keyed by output variable. Unknown variables yield no records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResults {
    records: BTreeMap<String, Vec<ZoneRecord>>,
}

impl InMemoryResults {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the records of one variable.
    pub fn with_variable(mut self, variable: impl Into<String>, records: Vec<ZoneRecord>) -> Self {
        self.records.insert(variable.into(), records);
        self
    }
}

impl ResultReader for InMemoryResults {
    type Error = Infallible;

    fn hourly_by_zone(&self, variable: &str) -> Result<Vec<ZoneRecord>, Self::Error> {
        Ok(self.records.get(variable).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_lookup() {
        let reader =
            InMemoryResults::new().with_variable("Zone Heat Index", vec![ZoneRecord::new(0, "Z", 30.0)]);
        assert_eq!(reader.hourly_by_zone("Zone Heat Index").unwrap().len(), 1);
        assert!(reader.hourly_by_zone("Other").unwrap().is_empty());
    }
}
