//! Outputs command: list the simulation output variables resiliency needs.

use anyhow::Result;

use revive_resilience::{RESILIENCY_OUTPUT_VARIABLES, render_output_variables};

use crate::cli::OutputsArgs;

/// Print the variables, as names or as IDF objects.
pub fn run(args: OutputsArgs) -> Result<()> {
    if args.idf {
        print!("{}", render_output_variables(&RESILIENCY_OUTPUT_VARIABLES));
    } else {
        for name in RESILIENCY_OUTPUT_VARIABLES {
            println!("{name}");
        }
    }
    Ok(())
}
