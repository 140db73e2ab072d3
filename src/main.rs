mod cli;
mod config;
mod convert;
mod dew_point_cmd;
mod hours_cmd;
mod logging;
mod outputs_cmd;
mod program_cmd;
mod weather_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Weather(args) => weather_cmd::run(args),
        Command::DewPoint(args) => dew_point_cmd::run(args),
        Command::Hours(args) => hours_cmd::run(args),
        Command::Program(args) => program_cmd::run(args),
        Command::Outputs(args) => outputs_cmd::run(args),
    }
}
