//! Unit conversion factors.

/// Cubic metres per second in one cubic foot per minute.
pub const M3S_PER_CFM: f64 = 0.000_471_947_443;

/// Square feet in one square metre.
pub const FT2_PER_M2: f64 = 10.763_910_4;
