//! Dew-point command: psychrometric dew-point from dry-bulb and wet-bulb.

use anyhow::{Context, Result};

use revive_psychro::calculate_dew_point;

use crate::cli::DewPointArgs;

/// Compute and print the dew-point.
pub fn run(args: DewPointArgs) -> Result<()> {
    let calc = calculate_dew_point(args.dry_bulb, args.wet_bulb, args.elevation)
        .context("dew-point calculation failed")?;
    println!("dry_bulb_c     {:.2}", calc.dry_bulb());
    println!("dew_point_c    {:.2}", calc.dew_point());
    println!("rel_humidity   {:.1}", calc.rel_humidity());
    println!("pressure_pa    {:.0}", calc.pressure_pa());
    Ok(())
}
