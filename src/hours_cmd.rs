//! Hours command: classify simulation results into resiliency hours.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use revive_io::{CommandRecordReader, JsonRecordReader, write_hours_parquet, write_summary_json};
use revive_resilience::{ClassifierConfig, ResiliencyHours, ResultReader, assess_resiliency};

use crate::cli::HoursArgs;
use crate::config::{HoursToml, ReviveConfig};
use crate::convert;

fn assess_with<R: ResultReader>(
    reader: &R,
    config: &ClassifierConfig,
    zones: &[String],
) -> Result<ResiliencyHours> {
    assess_resiliency(reader, config, zones).context("resiliency classification failed")
}

fn assess(hours: &HoursToml, config: &ClassifierConfig) -> Result<ResiliencyHours> {
    match hours.source.to_lowercase().as_str() {
        "json" => {
            info!(dir = %hours.results_dir.display(), "reading zone records");
            assess_with(&JsonRecordReader::new(&hours.results_dir), config, &hours.zones)
        }
        "command" => {
            let Some(program) = hours.extractor.as_ref() else {
                bail!("[hours].source = \"command\" needs [hours].extractor");
            };
            let Some(sql) = hours.sql.as_ref() else {
                bail!("[hours].source = \"command\" needs [hours].sql");
            };
            let reader = CommandRecordReader::new(program, sql, &hours.results_dir)
                .with_args(hours.extractor_args.clone());
            assess_with(&reader, config, &hours.zones)
        }
        other => bail!("unknown [hours].source: {other:?} (expected \"json\" or \"command\")"),
    }
}

/// Run the resiliency-hours classification.
pub fn run(args: HoursArgs) -> Result<()> {
    let _cmd = info_span!("hours").entered();
    let config = ReviveConfig::load(&args.config)?;
    let classifier = convert::build_classifier_config(&config.hours)?;
    let writer_cfg = convert::build_writer_config(&config.hours)?;

    let hours = assess(&config.hours, &classifier)?;
    info!(
        winter_zones = hours.winter().len(),
        summer_zones = hours.summer().len(),
        "classified resiliency hours"
    );

    let output = args.output.unwrap_or(config.hours.output);
    let mut zones = hours.winter().to_vec();
    zones.extend_from_slice(hours.summer());
    write_hours_parquet(&output, &zones, &writer_cfg)
        .with_context(|| format!("failed to write Parquet: {}", output.display()))?;

    let summary_path = args.summary.unwrap_or(config.hours.summary);
    let summary = hours.summary(&classifier);
    write_summary_json(&summary_path, &summary)
        .with_context(|| format!("failed to write summary: {}", summary_path.display()))?;

    for zone in summary.winter.iter().chain(&summary.summer) {
        for (channel, total) in &zone.totals {
            println!("{:<24} {channel:<34} {total:>10.1}", zone.zone);
        }
    }
    Ok(())
}
