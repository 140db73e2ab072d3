//! EnergyPlus weather (EPW) files.
//!
//! An EPW is eight header lines followed by one comma-separated row per hour.
//! Only dry-bulb (field 6) and dew-point (field 7) are interpreted; every other
//! field is kept as text and written back unchanged.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use revive_calendar::YearKind;
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate::{validate_numeric_columns, validate_row_count, validate_series};

/// Number of header lines before the hourly data.
pub const EPW_HEADER_LINES: usize = 8;

/// 0-based field index of dry-bulb temperature.
pub const DRY_BULB_FIELD: usize = 6;

/// 0-based field index of dew-point temperature.
pub const DEW_POINT_FIELD: usize = 7;

/// Prefix of a resiliency weather file name.
pub const RESILIENCY_EPW_PREFIX: &str = "Phius_REVIVE_2024_";

/// Default output directory for resiliency weather files.
pub const DEFAULT_WEATHER_DIR: &str = "weather";

/// An EPW held in memory with its temperature columns parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct EpwFile {
    source: PathBuf,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    dry_bulb: Vec<f64>,
    dew_point: Vec<f64>,
}

impl EpwFile {
    /// Parses EPW text. `source` is kept for naming the output file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the header is short, the row count is
    /// not 8760 or 8784, or a dry-bulb/dew-point field is not numeric.
    pub fn parse(text: &str, source: impl Into<PathBuf>) -> Result<Self, IoError> {
        let mut lines = text.lines();
        let header: Vec<String> = lines
            .by_ref()
            .take(EPW_HEADER_LINES)
            .map(str::to_string)
            .collect();
        if header.len() < EPW_HEADER_LINES {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "expected {EPW_HEADER_LINES} header lines, got {}",
                    header.len()
                ),
            });
        }

        let rows: Vec<Vec<String>> = lines
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.split(',').map(str::to_string).collect())
            .collect();

        let mut c = validate_row_count(rows.len());
        c.extend(validate_numeric_columns(
            &rows,
            DEW_POINT_FIELD + 1,
            &[(DRY_BULB_FIELD, "dry-bulb"), (DEW_POINT_FIELD, "dew-point")],
        ));
        c.finish()?;

        let column = |i: usize| -> Vec<f64> {
            rows.iter()
                .map(|r| r[i].trim().parse::<f64>().unwrap_or(f64::NAN))
                .collect()
        };
        let dry_bulb = column(DRY_BULB_FIELD);
        let dew_point = column(DEW_POINT_FIELD);

        Ok(Self {
            source: source.into(),
            header,
            rows,
            dry_bulb,
            dew_point,
        })
    }

    /// Path the file was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The eight header lines, kept verbatim.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of hourly rows.
    pub fn n_hours(&self) -> usize {
        self.rows.len()
    }

    /// Standard or leap, from the row count.
    pub fn year_kind(&self) -> Result<YearKind, IoError> {
        Ok(YearKind::from_n_hours(self.n_hours())?)
    }

    /// Hourly dry-bulb, degrees C.
    pub fn dry_bulb(&self) -> &[f64] {
        &self.dry_bulb
    }

    /// Hourly dew-point, degrees C.
    pub fn dew_point(&self) -> &[f64] {
        &self.dew_point
    }

    /// Replaces both temperature columns. Values are written with one decimal.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if either series has the wrong length or
    /// a non-finite value.
    pub fn with_temperatures(
        mut self,
        dry_bulb: &[f64],
        dew_point: &[f64],
    ) -> Result<Self, IoError> {
        let n = self.rows.len();
        let mut c = validate_series(dry_bulb, n, "dry_bulb");
        c.extend(validate_series(dew_point, n, "dew_point"));
        c.finish()?;

        for ((row, &db), &dp) in self.rows.iter_mut().zip(dry_bulb).zip(dew_point) {
            row[DRY_BULB_FIELD] = format!("{db:.1}");
            row[DEW_POINT_FIELD] = format!("{dp:.1}");
        }
        self.dry_bulb = dry_bulb.to_vec();
        self.dew_point = dew_point.to_vec();
        Ok(self)
    }

    /// Renders the file as EPW text.
    pub fn to_epw_string(&self) -> String {
        let mut out = String::new();
        for line in &self.header {
            out.push_str(line);
            out.push('\n');
        }
        for row in &self.rows {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}", row.join(","));
        }
        out
    }

    /// Writes the file to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), IoError> {
        std::fs::write(path, self.to_epw_string()).map_err(|e| IoError::io(path, e))
    }
}

/// Reads an EPW from disk. Bytes that are not valid UTF-8 are replaced.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Io`] on read failure and
/// [`IoError::Validation`] for malformed content.
pub fn read_epw(path: &Path) -> Result<EpwFile, IoError> {
    let bytes = std::fs::read(path).map_err(|e| IoError::io(path, e))?;
    let epw = EpwFile::parse(&String::from_utf8_lossy(&bytes), path)?;
    debug!(path = %path.display(), hours = epw.n_hours(), "read epw");
    Ok(epw)
}

/// Output path of the resiliency version of `source` inside `output_dir`.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if `source` has no file name.
pub fn resiliency_epw_path(source: &Path, output_dir: &Path) -> Result<PathBuf, IoError> {
    let name = source.file_name().ok_or_else(|| IoError::Validation {
        count: 1,
        details: format!("weather file path '{}' has no file name", source.display()),
    })?;
    let mut file_name = RESILIENCY_EPW_PREFIX.to_string();
    file_name.push_str(&name.to_string_lossy());
    Ok(output_dir.join(file_name))
}

/// Writes `epw` as a resiliency weather file in `output_dir`, creating the
/// directory if needed, and returns the written path.
///
/// # Errors
///
/// Returns [`IoError`] if the directory or file cannot be written.
pub fn write_resiliency_epw(epw: &EpwFile, output_dir: &Path) -> Result<PathBuf, IoError> {
    std::fs::create_dir_all(output_dir).map_err(|e| IoError::io(output_dir, e))?;
    let path = resiliency_epw_path(epw.source(), output_dir)?;
    epw.write(&path)?;
    info!(path = %path.display(), "wrote resiliency weather file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_epw(n_hours: usize) -> String {
        let mut s = String::new();
        s.push_str("LOCATION,Testville,ST,USA,TMY3,999999,40.0,-105.0,-7.0,1600.0\n");
        for h in 1..EPW_HEADER_LINES {
            s.push_str(&format!("HEADER {h}\n"));
        }
        for i in 0..n_hours {
            let day = i / 24;
            s.push_str(&format!(
                "1999,1,{},{},60,?9?9?9,{:.1},{:.1},50,83000,0,0\n",
                day + 1,
                i % 24 + 1,
                10.0 + (i % 24) as f64 * 0.5,
                2.0
            ));
        }
        s
    }

    #[test]
    fn parse_reads_columns() {
        let epw = EpwFile::parse(&sample_epw(8760), "a.epw").unwrap();
        assert_eq!(epw.n_hours(), 8760);
        assert_eq!(epw.year_kind().unwrap(), YearKind::Standard);
        assert_eq!(epw.header().len(), EPW_HEADER_LINES);
        assert_eq!(epw.dry_bulb()[1], 10.5);
        assert_eq!(epw.dew_point()[0], 2.0);
    }

    #[test]
    fn parse_leap() {
        let epw = EpwFile::parse(&sample_epw(8784), "a.epw").unwrap();
        assert_eq!(epw.year_kind().unwrap(), YearKind::Leap);
    }

    #[test]
    fn parse_rejects_row_count() {
        let err = EpwFile::parse(&sample_epw(100), "a.epw").unwrap_err();
        assert!(matches!(err, IoError::Validation { .. }));
    }

    #[test]
    fn parse_rejects_short_header() {
        let err = EpwFile::parse("LOCATION\nX\n", "a.epw").unwrap_err();
        assert!(err.to_string().contains("header lines"));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let text = sample_epw(8760).replacen(",10.0,2.0,", ",abc,2.0,", 1);
        let err = EpwFile::parse(&text, "a.epw").unwrap_err();
        assert!(err.to_string().contains("dry-bulb 'abc'"));
    }

    #[test]
    fn replacement_keeps_other_fields() {
        let epw = EpwFile::parse(&sample_epw(8760), "a.epw").unwrap();
        let dry = vec![-12.34; 8760];
        let dew = vec![-20.06; 8760];
        let morphed = epw.with_temperatures(&dry, &dew).unwrap();
        let text = morphed.to_epw_string();
        let first_row = text.lines().nth(EPW_HEADER_LINES).unwrap();
        assert_eq!(first_row, "1999,1,1,1,60,?9?9?9,-12.3,-20.1,50,83000,0,0");
    }

    #[test]
    fn replacement_length_checked() {
        let epw = EpwFile::parse(&sample_epw(8760), "a.epw").unwrap();
        assert!(epw.with_temperatures(&[1.0; 10], &[1.0; 8760]).is_err());
    }

    #[test]
    fn output_path_prefix() {
        let p = resiliency_epw_path(Path::new("/data/USA_CO_Denver.epw"), Path::new("out"))
            .unwrap();
        assert_eq!(p, Path::new("out/Phius_REVIVE_2024_USA_CO_Denver.epw"));
        assert!(resiliency_epw_path(Path::new("/"), Path::new("out")).is_err());
    }
}
