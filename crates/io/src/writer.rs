//! High-level writers for resiliency results.

use std::path::Path;

use parquet::file::properties::WriterProperties;
use revive_resilience::{ResiliencySummary, ZoneClassification, to_json};
use tracing::info;

use crate::error::IoError;
use crate::parquet_write;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level = parquet::basic::ZstdLevel::try_new(3)?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for writing classified hours to Parquet.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    compression: Compression,
    /// Maximum number of rows per row group.
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Returns the compression algorithm.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the row group size.
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<(), IoError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|e| IoError::io(dir, e))
        }
        _ => Ok(()),
    }
}

/// Writes every classified series of `zones` to one Parquet file, one row
/// per zone, channel and hour. Returns the number of rows written.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Parquet`] / [`IoError::Io`] if writing fails.
pub fn write_hours_parquet(
    path: &Path,
    zones: &[ZoneClassification],
    config: &WriterConfig,
) -> Result<usize, IoError> {
    config.validate()?;
    ensure_parent(path)?;

    let schema = parquet_write::build_schema();
    let props = WriterProperties::builder()
        .set_compression(config.compression.to_parquet()?)
        .set_max_row_group_size(config.row_group_size)
        .build();

    let batches = zones
        .iter()
        .flat_map(|z| z.series())
        .filter(|s| !s.is_empty())
        .map(|s| parquet_write::series_to_record_batch(s, &schema))
        .collect::<Result<Vec<_>, _>>()?;
    let rows = batches.iter().map(|b| b.num_rows()).sum();

    parquet_write::write_batches(path, &batches, &schema, props)?;
    info!(path = %path.display(), rows, "wrote classified hours");
    Ok(rows)
}

/// Writes the per-zone totals as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialisation fails and [`IoError::Io`] if the
/// file cannot be written.
pub fn write_summary_json(path: &Path, summary: &ResiliencySummary) -> Result<(), IoError> {
    let json = to_json(summary).map_err(|e| IoError::Json {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    ensure_parent(path)?;
    std::fs::write(path, json).map_err(|e| IoError::io(path, e))?;
    info!(path = %path.display(), "wrote resiliency summary");
    Ok(())
}
