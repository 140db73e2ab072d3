use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Phius REVIVE resiliency weather and outage analysis.
#[derive(Parser)]
#[command(
    name = "revive",
    version,
    about = "Resiliency weather morphing and outage-period analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Morph the extreme weeks of an EPW and write the resiliency weather file.
    Weather(WeatherArgs),
    /// Compute dew-point from dry-bulb and mean coincident wet-bulb.
    DewPoint(DewPointArgs),
    /// Classify SET and heat-index results into resiliency hours.
    Hours(HoursArgs),
    /// Build the outage-mode program for a building.
    Program(ProgramArgs),
    /// List the output variables a resiliency simulation must request.
    Outputs(OutputsArgs),
}

/// Arguments for the `weather` subcommand.
#[derive(clap::Args)]
pub struct WeatherArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "revive.toml")]
    pub config: PathBuf,

    /// Override the source EPW path from config.
    #[arg(long)]
    pub epw: Option<PathBuf>,

    /// Override the STAT path from config.
    #[arg(long)]
    pub stat: Option<PathBuf>,

    /// Override the output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub extremes: ExtremeArgs,
}

/// n-year return extremes given on the command line, degrees C.
#[derive(clap::Args, Default)]
pub struct ExtremeArgs {
    /// Winter 10-year dry-bulb.
    #[arg(long, allow_negative_numbers = true)]
    pub winter_dry_bulb: Option<f64>,

    /// Winter 10-year dew-point.
    #[arg(long, allow_negative_numbers = true)]
    pub winter_dew_point: Option<f64>,

    /// Summer 20-year dry-bulb.
    #[arg(long, allow_negative_numbers = true)]
    pub summer_dry_bulb: Option<f64>,

    /// Summer 20-year dew-point.
    #[arg(long, allow_negative_numbers = true)]
    pub summer_dew_point: Option<f64>,
}

/// Arguments for the `dew-point` subcommand.
#[derive(clap::Args)]
pub struct DewPointArgs {
    /// Dry-bulb temperature, degrees C.
    #[arg(long, allow_negative_numbers = true)]
    pub dry_bulb: f64,

    /// Wet-bulb temperature, degrees C.
    #[arg(long, allow_negative_numbers = true)]
    pub wet_bulb: f64,

    /// Site elevation, m. Standard sea-level pressure when omitted.
    #[arg(long, allow_negative_numbers = true)]
    pub elevation: Option<f64>,
}

/// Arguments for the `hours` subcommand.
#[derive(clap::Args)]
pub struct HoursArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "revive.toml")]
    pub config: PathBuf,

    /// Override the hourly Parquet output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the summary JSON path from config.
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

/// Arguments for the `program` subcommand.
#[derive(clap::Args)]
pub struct ProgramArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "revive.toml")]
    pub config: PathBuf,

    /// Building description JSON.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the program JSON output.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `outputs` subcommand.
#[derive(clap::Args)]
pub struct OutputsArgs {
    /// Print IDF `Output:Variable` objects instead of plain names.
    #[arg(long)]
    pub idf: bool,
}
