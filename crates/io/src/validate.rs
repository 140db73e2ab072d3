//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus helpers that check EPW data
//! rows and replacement series before they are written.

use crate::error::IoError;

/// At most this many messages are spelled out in the error details.
const MAX_DETAILS: usize = 10;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Moves every error of `other` into `self`.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins the first messages with `"; "` and notes how
    /// many more were suppressed.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        let count = self.errors.len();
        if count == 0 {
            return Ok(());
        }
        let mut details = self.errors[..count.min(MAX_DETAILS)].join("; ");
        if count > MAX_DETAILS {
            details.push_str(&format!("; and {} more", count - MAX_DETAILS));
        }
        Err(IoError::Validation { count, details })
    }
}

/// Checks that an EPW has a supported number of data rows.
pub(crate) fn validate_row_count(n_rows: usize) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    if n_rows != 8760 && n_rows != 8784 {
        c.push(format!("expected 8760 or 8784 data rows, got {n_rows}"));
    }
    c
}

/// Checks that every row has at least `min_fields` fields and that `columns`
/// parse as finite numbers. Row numbers in messages are 1-based data rows.
pub(crate) fn validate_numeric_columns(
    rows: &[Vec<String>],
    min_fields: usize,
    columns: &[(usize, &str)],
) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, row) in rows.iter().enumerate() {
        if row.len() < min_fields {
            c.push(format!(
                "row {}: {} fields, need at least {min_fields}",
                i + 1,
                row.len()
            ));
            continue;
        }
        for &(col, name) in columns {
            let ok = row[col]
                .trim()
                .parse::<f64>()
                .is_ok_and(|v| v.is_finite());
            if !ok {
                c.push(format!("row {}: {name} '{}' is not a number", i + 1, row[col]));
            }
        }
    }
    c
}

/// Checks a replacement series: length must be `expected` and every value finite.
pub(crate) fn validate_series(values: &[f64], expected: usize, name: &str) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    if values.len() != expected {
        c.push(format!("{name} length {} != {expected} rows", values.len()));
    }
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        c.push(format!("{name} is not finite at hour {i}"));
    }
    c
}
