use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Config file name used when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "revive.toml";

/// Top-level REVIVE configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviveConfig {
    /// Weather files and return extremes.
    #[serde(default)]
    pub weather: WeatherToml,

    /// Morphing iteration settings.
    #[serde(default)]
    pub morph: MorphToml,

    /// Resiliency-hours classification settings.
    #[serde(default)]
    pub hours: HoursToml,

    /// Outage program settings.
    #[serde(default)]
    pub program: ProgramToml,
}

impl ReviveConfig {
    /// Reads and parses `path`. A missing file at the default location yields
    /// the default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() && path == Path::new(DEFAULT_CONFIG_FILE) {
            info!("no {DEFAULT_CONFIG_FILE} found, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherToml {
    pub epw: Option<PathBuf>,
    pub stat: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub extremes: ExtremesToml,
}

impl Default for WeatherToml {
    fn default() -> Self {
        Self {
            epw: None,
            stat: None,
            output_dir: default_output_dir(),
            extremes: ExtremesToml::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(revive_io::DEFAULT_WEATHER_DIR)
}

/// n-year return extremes, degrees C.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtremesToml {
    pub winter_dry_bulb: Option<f64>,
    pub winter_dew_point: Option<f64>,
    pub summer_dry_bulb: Option<f64>,
    pub summer_dew_point: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MorphToml {
    #[serde(default = "default_relaxation_factor")]
    pub relaxation_factor: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_expansion_hours")]
    pub expansion_hours: usize,
    #[serde(default = "default_patch_extent")]
    pub patch_extent: String,
}

impl Default for MorphToml {
    fn default() -> Self {
        Self {
            relaxation_factor: default_relaxation_factor(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            expansion_hours: default_expansion_hours(),
            patch_extent: default_patch_extent(),
        }
    }
}

fn default_relaxation_factor() -> f64 {
    0.1
}
fn default_tolerance() -> f64 {
    0.01
}
fn default_max_iterations() -> usize {
    100
}
fn default_expansion_hours() -> usize {
    24
}
fn default_patch_extent() -> String {
    "expanded".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoursToml {
    /// `"json"` reads pre-extracted files, `"command"` runs the extractor.
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    pub sql: Option<PathBuf>,
    pub extractor: Option<String>,
    #[serde(default)]
    pub extractor_args: Vec<String>,
    /// Zones to report; empty means all.
    #[serde(default)]
    pub zones: Vec<String>,
    #[serde(default = "default_hours_output")]
    pub output: PathBuf,
    #[serde(default = "default_summary_output")]
    pub summary: PathBuf,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
    #[serde(default)]
    pub winter: WinterToml,
    #[serde(default)]
    pub summer: SummerToml,
}

impl Default for HoursToml {
    fn default() -> Self {
        Self {
            source: default_source(),
            results_dir: default_results_dir(),
            sql: None,
            extractor: None,
            extractor_args: Vec::new(),
            zones: Vec::new(),
            output: default_hours_output(),
            summary: default_summary_output(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
            winter: WinterToml::default(),
            summer: SummerToml::default(),
        }
    }
}

fn default_source() -> String {
    "json".to_string()
}
fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}
fn default_hours_output() -> PathBuf {
    PathBuf::from("resiliency_hours.parquet")
}
fn default_summary_output() -> PathBuf {
    PathBuf::from("resiliency_summary.json")
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

/// SET thresholds, degrees C.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WinterToml {
    #[serde(default = "default_upper_c")]
    pub upper_c: f64,
    #[serde(default = "default_lower_c")]
    pub lower_c: f64,
}

impl Default for WinterToml {
    fn default() -> Self {
        Self {
            upper_c: default_upper_c(),
            lower_c: default_lower_c(),
        }
    }
}

fn default_upper_c() -> f64 {
    12.22222
}
fn default_lower_c() -> f64 {
    2.22222
}

/// Heat-index band lower bounds, degrees C.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummerToml {
    #[serde(default = "default_caution_c")]
    pub caution_c: f64,
    #[serde(default = "default_warning_c")]
    pub warning_c: f64,
    #[serde(default = "default_danger_c")]
    pub danger_c: f64,
    #[serde(default = "default_extreme_danger_c")]
    pub extreme_danger_c: f64,
}

impl Default for SummerToml {
    fn default() -> Self {
        Self {
            caution_c: default_caution_c(),
            warning_c: default_warning_c(),
            danger_c: default_danger_c(),
            extreme_danger_c: default_extreme_danger_c(),
        }
    }
}

fn default_caution_c() -> f64 {
    26.7
}
fn default_warning_c() -> f64 {
    32.2
}
fn default_danger_c() -> f64 {
    39.4
}
fn default_extreme_danger_c() -> f64 {
    51.7
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramToml {
    #[serde(default = "default_critical_watts")]
    pub critical_watts_per_dwelling: f64,
    #[serde(default = "default_vent_cfm")]
    pub vent_cfm_per_person: f64,
    #[serde(default = "default_trim_hours")]
    pub trim_hours: usize,
}

impl Default for ProgramToml {
    fn default() -> Self {
        Self {
            critical_watts_per_dwelling: default_critical_watts(),
            vent_cfm_per_person: default_vent_cfm(),
            trim_hours: default_trim_hours(),
        }
    }
}

fn default_critical_watts() -> f64 {
    33.0
}
fn default_vent_cfm() -> f64 {
    5.0
}
fn default_trim_hours() -> usize {
    24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let c: ReviveConfig = toml::from_str("").unwrap();
        assert_eq!(c.morph.max_iterations, 100);
        assert_eq!(c.morph.patch_extent, "expanded");
        assert_eq!(c.weather.output_dir, PathBuf::from("weather"));
        assert_eq!(c.hours.source, "json");
        assert_eq!(c.hours.winter.upper_c, 12.22222);
        assert_eq!(c.hours.summer.extreme_danger_c, 51.7);
        assert_eq!(c.program.trim_hours, 24);
    }

    #[test]
    fn full_file_parses() {
        let c: ReviveConfig = toml::from_str(
            r#"
            [weather]
            epw = "USA_CO_Denver.epw"
            stat = "USA_CO_Denver.stat"

            [weather.extremes]
            winter_dry_bulb = -23.5
            winter_dew_point = -30.1
            summer_dry_bulb = 37.8
            summer_dew_point = 18.2

            [morph]
            patch_extent = "core"

            [hours]
            source = "command"
            sql = "run/eplusout.sql"
            extractor = "python3"
            extractor_args = ["extract.py"]
            zones = ["LIVING"]

            [program]
            trim_hours = 12
            "#,
        )
        .unwrap();
        assert_eq!(c.weather.extremes.winter_dry_bulb, Some(-23.5));
        assert_eq!(c.morph.patch_extent, "core");
        assert_eq!(c.hours.extractor_args, vec!["extract.py".to_string()]);
        assert_eq!(c.program.trim_hours, 12);
    }

    #[test]
    fn unknown_key_rejected() {
        let r: std::result::Result<ReviveConfig, _> = toml::from_str("[morph]\nfoo = 1\n");
        assert!(r.is_err());
    }

    #[test]
    fn missing_explicit_file_is_error() {
        assert!(ReviveConfig::load(Path::new("/no/such/revive.toml")).is_err());
    }
}
