//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::cli::ExtremeArgs;
use crate::config::*;

use revive_io::{Compression, WriterConfig};
use revive_morph::{MorphConfig, PatchExtent, ReturnExtremes};
use revive_program::OutageRules;
use revive_resilience::{ClassifierConfig, HeatIndexBands, WinterThresholds};

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Parses a patch extent name (`expanded` or `core`).
pub fn parse_patch_extent(s: &str) -> Result<PatchExtent> {
    match s.to_lowercase().as_str() {
        "expanded" => Ok(PatchExtent::Expanded),
        "core" => Ok(PatchExtent::Core),
        other => bail!("unknown patch extent: {other:?} (expected \"expanded\" or \"core\")"),
    }
}

/// Builds a [`MorphConfig`] from the TOML morph configuration.
pub fn build_morph_config(morph: &MorphToml) -> Result<MorphConfig> {
    let cfg = MorphConfig::new()
        .with_relaxation_factor(morph.relaxation_factor)
        .with_tolerance(morph.tolerance)
        .with_max_iterations(morph.max_iterations)
        .with_expansion_hours(morph.expansion_hours)
        .with_patch_extent(parse_patch_extent(&morph.patch_extent)?);
    cfg.validate().context("invalid [morph] configuration")?;
    Ok(cfg)
}

fn extremes_from(
    winter_dry_bulb: Option<f64>,
    winter_dew_point: Option<f64>,
    summer_dry_bulb: Option<f64>,
    summer_dew_point: Option<f64>,
) -> ReturnExtremes {
    let mut e = ReturnExtremes::new();
    if let Some(v) = winter_dry_bulb {
        e = e.with_winter_dry_bulb(v);
    }
    if let Some(v) = winter_dew_point {
        e = e.with_winter_dew_point(v);
    }
    if let Some(v) = summer_dry_bulb {
        e = e.with_summer_dry_bulb(v);
    }
    if let Some(v) = summer_dew_point {
        e = e.with_summer_dew_point(v);
    }
    e
}

/// Builds the return extremes from config, with command-line values taking precedence.
pub fn build_return_extremes(toml: &ExtremesToml, cli: &ExtremeArgs) -> ReturnExtremes {
    let from_file = extremes_from(
        toml.winter_dry_bulb,
        toml.winter_dew_point,
        toml.summer_dry_bulb,
        toml.summer_dew_point,
    );
    let from_cli = extremes_from(
        cli.winter_dry_bulb,
        cli.winter_dew_point,
        cli.summer_dry_bulb,
        cli.summer_dew_point,
    );
    from_file.merge(&from_cli)
}

/// Builds a [`ClassifierConfig`] from the TOML hours configuration.
pub fn build_classifier_config(hours: &HoursToml) -> Result<ClassifierConfig> {
    let winter = WinterThresholds::new()
        .with_upper_c(hours.winter.upper_c)
        .with_lower_c(hours.winter.lower_c);
    let summer = HeatIndexBands::new().with_bounds(
        hours.summer.caution_c,
        hours.summer.warning_c,
        hours.summer.danger_c,
        hours.summer.extreme_danger_c,
    );
    let cfg = ClassifierConfig::new().with_winter(winter).with_summer(summer);
    cfg.validate().context("invalid [hours] thresholds")?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML hours configuration.
pub fn build_writer_config(hours: &HoursToml) -> Result<WriterConfig> {
    let compression = parse_compression(&hours.compression)?;
    Ok(WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(hours.row_group_size))
}

/// Builds the [`OutageRules`] from the TOML program configuration.
pub fn build_outage_rules(program: &ProgramToml) -> Result<OutageRules> {
    let rules = OutageRules::new()
        .with_critical_watts_per_dwelling(program.critical_watts_per_dwelling)
        .with_vent_cfm_per_person(program.vent_cfm_per_person)
        .with_trim_hours(program.trim_hours);
    rules.validate().context("invalid [program] configuration")?;
    Ok(rules)
}
