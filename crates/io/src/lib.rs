//! # revive-io
//!
//! File boundary of the resiliency workflow: EPW weather files in and out,
//! extreme-week periods from STAT files, per-zone simulation results from
//! JSON or an external extractor, and Parquet / JSON result output.

mod epw;
mod error;
mod parquet_write;
mod records;
mod stat;
mod validate;
mod writer;

pub use epw::{
    DEFAULT_WEATHER_DIR, DEW_POINT_FIELD, DRY_BULB_FIELD, EPW_HEADER_LINES, EpwFile,
    RESILIENCY_EPW_PREFIX, read_epw, resiliency_epw_path, write_resiliency_epw,
};
pub use error::IoError;
pub use records::{CommandRecordReader, JsonRecordReader, read_zone_records, records_file_name};
pub use stat::{ExtremePeriods, parse_stat, read_stat};
pub use writer::{Compression, WriterConfig, write_hours_parquet, write_summary_json};
