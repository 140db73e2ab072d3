//! Low-level Parquet column building for classified hourly series.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, StringArray, UInt8Array, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use revive_resilience::ClassifiedHourSeries;

use crate::error::IoError;

/// Column names, in schema order.
pub(crate) const COLUMNS: [&str; 7] = [
    "zone",
    "channel",
    "month",
    "day",
    "hour",
    "hour_of_year",
    "value",
];

/// Builds the Arrow schema for classified hourly output.
pub(crate) fn build_schema() -> Schema {
    Schema::new(vec![
        Field::new(COLUMNS[0], DataType::Utf8, false),
        Field::new(COLUMNS[1], DataType::Utf8, false),
        Field::new(COLUMNS[2], DataType::UInt8, false),
        Field::new(COLUMNS[3], DataType::UInt8, false),
        Field::new(COLUMNS[4], DataType::UInt8, false),
        Field::new(COLUMNS[5], DataType::UInt32, false),
        Field::new(COLUMNS[6], DataType::Float64, false),
    ])
}

/// Converts one zone/channel series into an Arrow [`RecordBatch`].
pub(crate) fn series_to_record_batch(
    series: &ClassifiedHourSeries,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let n = series.len();
    let stamps = series.timestamps();
    let year = series.year();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(vec![series.zone(); n])),
        Arc::new(StringArray::from(vec![series.channel().key(); n])),
        Arc::new(UInt8Array::from_iter_values(stamps.iter().map(|t| t.month()))),
        Arc::new(UInt8Array::from_iter_values(stamps.iter().map(|t| t.day()))),
        Arc::new(UInt8Array::from_iter_values(stamps.iter().map(|t| t.hour()))),
        Arc::new(UInt32Array::from_iter_values(
            stamps.iter().map(|t| t.hour_of_year(year) as u32),
        )),
        Arc::new(Float64Array::from(series.values().to_vec())),
    ];

    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created and
/// [`IoError::Parquet`] if batch writing or file finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::io(path, e))?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use revive_resilience::{WinterThresholds, ZoneRecord, classify_winter};

    #[test]
    fn schema_columns() {
        let schema = build_schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, COLUMNS);
    }

    #[test]
    fn record_batch_shape() {
        // 2017-01-01T00:00Z and 01:00Z
        let records = vec![
            ZoneRecord::new(1_483_228_800_000, "Zone 1", 10.0),
            ZoneRecord::new(1_483_232_400_000, "Zone 1", 1.0),
        ];
        let zones = classify_winter(&records, &WinterThresholds::default()).unwrap();
        let series = &zones[0].series()[0];

        let schema = build_schema();
        let batch = series_to_record_batch(series, &schema).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), 7);
    }
}
