//! Hourly per-zone simulation results: JSON files and the external extractor.
//!
//! Both readers implement [`ResultReader`], so the classifier does not care
//! whether records come from files on disk or from a freshly run extractor.

use std::path::{Path, PathBuf};
use std::process::Command;

use revive_resilience::{ResultReader, ZoneRecord};
use tracing::{debug, info, warn};

use crate::error::IoError;

/// Reads a JSON array of `{ "Date": ms, "Zone": name, "Value": number }` records.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Io`] on read failure and
/// [`IoError::Json`] for malformed content.
pub fn read_zone_records(path: &Path) -> Result<Vec<ZoneRecord>, IoError> {
    let bytes = std::fs::read(path).map_err(|e| IoError::io(path, e))?;
    let records: Vec<ZoneRecord> = serde_json::from_slice(&bytes).map_err(|e| IoError::Json {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), records = records.len(), "read zone records");
    Ok(records)
}

/// File name used for the records of `variable`: every character that is not
/// ASCII alphanumeric becomes `_`, and `.json` is appended.
pub fn records_file_name(variable: &str) -> String {
    let stem: String = variable
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}.json")
}

/// Reads one JSON file per output variable from a directory.
#[derive(Debug, Clone)]
pub struct JsonRecordReader {
    dir: PathBuf,
}

impl JsonRecordReader {
    /// Reads from `dir`, where the records of each variable live in
    /// [`records_file_name`]`(variable)`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `variable`.
    pub fn path_for(&self, variable: &str) -> PathBuf {
        self.dir.join(records_file_name(variable))
    }
}

impl ResultReader for JsonRecordReader {
    type Error = IoError;

    fn hourly_by_zone(&self, variable: &str) -> Result<Vec<ZoneRecord>, IoError> {
        read_zone_records(&self.path_for(variable))
    }
}

/// Runs an external program that extracts one variable from a simulation SQL
/// database into a JSON records file, then reads that file.
///
/// The program is invoked as `program [args...] <sql> <json_out> <variable>`.
#[derive(Debug, Clone)]
pub struct CommandRecordReader {
    program: String,
    args: Vec<String>,
    sql_path: PathBuf,
    output_dir: PathBuf,
}

impl CommandRecordReader {
    /// Creates a reader for the results in `sql_path`. Extracted JSON files are
    /// written to `output_dir`.
    pub fn new(
        program: impl Into<String>,
        sql_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            sql_path: sql_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Sets arguments placed before the positional ones, e.g. a script path.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    fn command_error(&self, reason: String) -> IoError {
        IoError::Command {
            program: self.program.clone(),
            reason,
        }
    }

    /// Runs the extractor for `variable` and returns the path of its JSON output.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if the SQL file is missing and
    /// [`IoError::Command`] if the program cannot start or exits unsuccessfully.
    pub fn extract(&self, variable: &str) -> Result<PathBuf, IoError> {
        if !self.sql_path.exists() {
            return Err(IoError::FileNotFound {
                path: self.sql_path.clone(),
            });
        }
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| IoError::io(&self.output_dir, e))?;
        let json_out = self.output_dir.join(records_file_name(variable));

        info!(program = %self.program, variable, "running result extractor");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.sql_path)
            .arg(&json_out)
            .arg(variable)
            .output()
            .map_err(|e| self.command_error(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines().filter(|l| l.contains("WARNING:")) {
            warn!(program = %self.program, "{}", line.trim());
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.command_error(format!("{}: {}", output.status, stderr.trim())));
        }
        Ok(json_out)
    }
}

impl ResultReader for CommandRecordReader {
    type Error = IoError;

    fn hourly_by_zone(&self, variable: &str) -> Result<Vec<ZoneRecord>, IoError> {
        read_zone_records(&self.extract(variable)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_sanitised() {
        assert_eq!(records_file_name("Zone Heat Index"), "Zone_Heat_Index.json");
        assert_eq!(
            records_file_name("Zone Air Temperature [C]"),
            "Zone_Air_Temperature__C_.json"
        );
    }

    #[test]
    fn json_reader_path() {
        let r = JsonRecordReader::new("/results");
        assert_eq!(
            r.path_for("Zone Heat Index"),
            PathBuf::from("/results/Zone_Heat_Index.json")
        );
    }

    #[test]
    fn missing_sql_file() {
        let r = CommandRecordReader::new("extractor", "/no/such/eplusout.sql", "/tmp");
        assert!(matches!(
            r.extract("Zone Heat Index"),
            Err(IoError::FileNotFound { .. })
        ));
    }
}
