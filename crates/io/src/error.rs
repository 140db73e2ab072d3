//! Error types for revive-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the revive-io crate.
///
/// This enum covers file system failures, malformed weather and statistics
/// files, failures of the external result extractor, and Parquet or JSON
/// output errors.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system I/O failure on a specific path.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Returned when JSON cannot be parsed or produced.
    #[error("json error in {}: {reason}", path.display())]
    Json {
        /// File involved.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// Wraps an error originating from the revive-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a statistics file lacks a required period line.
    #[error("'{name}' not found in {}", path.display())]
    MissingPeriod {
        /// Label of the missing period.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when the external result extractor cannot be started or fails.
    #[error("result extractor '{program}' failed: {reason}")]
    Command {
        /// Program that was invoked.
        program: String,
        /// Exit status or spawn failure, plus captured stderr.
        reason: String,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound { path: path.into() };
        }
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<revive_calendar::CalendarError> for IoError {
    fn from(e: revive_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.epw"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.epw");
    }

    #[test]
    fn io_not_found_maps_to_file_not_found() {
        let err = IoError::io(
            "/tmp/x.stat",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IoError::FileNotFound { .. }));
        let err = IoError::io(
            "/tmp/x.stat",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IoError::Io { .. }));
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "row 3: dry-bulb not numeric; row 9: too few fields".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): row 3: dry-bulb not numeric; row 9: too few fields"
        );
    }

    #[test]
    fn display_missing_period() {
        let err = IoError::MissingPeriod {
            name: "Extreme Hot Week".to_string(),
            path: PathBuf::from("/data/site.stat"),
        };
        assert_eq!(
            err.to_string(),
            "'Extreme Hot Week' not found in /data/site.stat"
        );
    }

    #[test]
    fn display_command() {
        let err = IoError::Command {
            program: "extract".to_string(),
            reason: "exit status 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "result extractor 'extract' failed: exit status 2"
        );
    }

    #[test]
    fn from_parquet_error() {
        let pq_err = parquet::errors::ParquetError::General("test pq error".to_string());
        let err: IoError = pq_err.into();
        assert!(matches!(err, IoError::Parquet { .. }));
        assert!(err.to_string().contains("test pq error"));
    }

    #[test]
    fn from_calendar_error() {
        let cal_err = revive_calendar::CalendarError::InvalidYearLength { n_hours: 10 };
        let err: IoError = cal_err.into();
        assert!(matches!(err, IoError::Calendar { .. }));
        assert!(err.to_string().contains("calendar error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
