//! Program command: derive the outage-mode building program.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use revive_morph::Season;
use revive_program::{Building, build_resiliency_program};

use crate::cli::ProgramArgs;
use crate::config::ReviveConfig;
use crate::convert;
use crate::weather_cmd::{WeatherInputs, load_inputs};

/// Build the resiliency program and write it as JSON.
pub fn run(args: ProgramArgs) -> Result<()> {
    let _cmd = info_span!("program").entered();
    let config = ReviveConfig::load(&args.config)?;
    let rules = convert::build_outage_rules(&config.program)?;
    let morph_cfg = convert::build_morph_config(&config.morph)?;

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read building file: {}", args.input.display()))?;
    let building: Building = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse building file: {}", args.input.display()))?;

    let WeatherInputs { epw, weeks } =
        load_inputs(&config.weather, None, None, morph_cfg.expansion_hours())?;
    let windows = [Season::Winter, Season::Summer].map(|s| weeks.get(s).padded());

    let program = build_resiliency_program(&building, &windows, epw.n_hours(), &rules)
        .context("failed to build resiliency program")?;

    let json = serde_json::to_string_pretty(&program).context("failed to serialise program")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("failed to write program: {}", args.output.display()))?;
    info!(path = %args.output.display(), name = %program.name, "program written");
    Ok(())
}
