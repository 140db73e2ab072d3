//! Weather command: morph the extreme weeks and write the resiliency EPW.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use revive_io::{EpwFile, read_epw, read_stat, write_resiliency_epw};
use revive_morph::{ExtremeWeeks, Season, locate_extreme_weeks, morph_weather};

use crate::cli::WeatherArgs;
use crate::config::{ReviveConfig, WeatherToml};
use crate::convert;

/// Source EPW and the extreme weeks taken from its STAT file.
pub struct WeatherInputs {
    pub epw: EpwFile,
    pub weeks: ExtremeWeeks,
}

/// Reads the EPW and STAT named in config (or overridden) and locates the weeks.
pub fn load_inputs(
    weather: &WeatherToml,
    epw_override: Option<&Path>,
    stat_override: Option<&Path>,
    expansion_hours: usize,
) -> Result<WeatherInputs> {
    let epw_path = epw_override
        .or(weather.epw.as_deref())
        .ok_or_else(|| anyhow!("no EPW path: set [weather].epw in config or use --epw"))?;
    let stat_path = stat_override
        .or(weather.stat.as_deref())
        .ok_or_else(|| anyhow!("no STAT path: set [weather].stat in config or use --stat"))?;

    info!(path = %epw_path.display(), "reading weather file");
    let epw = read_epw(epw_path)
        .with_context(|| format!("failed to read EPW: {}", epw_path.display()))?;
    let year = epw.year_kind()?;

    info!(path = %stat_path.display(), "reading climate statistics");
    let periods = read_stat(stat_path, year)
        .with_context(|| format!("failed to read STAT: {}", stat_path.display()))?;

    let weeks = locate_extreme_weeks(periods.cold, periods.hot, epw.n_hours(), expansion_hours)
        .context("invalid extreme weeks")?;
    Ok(WeatherInputs { epw, weeks })
}

/// Run the weather morphing pipeline.
pub fn run(args: WeatherArgs) -> Result<()> {
    let _cmd = info_span!("weather").entered();
    let config = ReviveConfig::load(&args.config)?;

    let morph_cfg = convert::build_morph_config(&config.morph)?;
    let extremes = convert::build_return_extremes(&config.weather.extremes, &args.extremes);
    extremes
        .validate()
        .context("missing n-year return extremes: set [weather.extremes] or pass them as flags")?;

    let WeatherInputs { epw, weeks } = load_inputs(
        &config.weather,
        args.epw.as_deref(),
        args.stat.as_deref(),
        morph_cfg.expansion_hours(),
    )?;
    let year = epw.year_kind()?;

    let weather = morph_weather(epw.dry_bulb(), epw.dew_point(), &weeks, &extremes, &morph_cfg)
        .context("weather morphing failed")?;
    if !weather.factors().all_converged() {
        warn!("at least one morphing factor did not converge; using best available values");
    }

    let morphed = epw
        .with_temperatures(weather.dry_bulb(), weather.dew_point())
        .context("failed to update EPW temperatures")?;
    let output_dir = args.output_dir.unwrap_or(config.weather.output_dir);
    let path = write_resiliency_epw(&morphed, &output_dir)
        .with_context(|| format!("failed to write EPW to {}", output_dir.display()))?;

    println!("{}", path.display());
    for season in [Season::Winter, Season::Summer] {
        let window = weeks.get(season).expanded();
        let (first, last) = window.bounds(year)?;
        println!("{season} outage: {first} to {last} (hours {window})");
    }
    Ok(())
}
