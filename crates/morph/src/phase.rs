//! Half-sine phase window.

use std::f64::consts::PI;

/// Returns `sin(pi * h / len)` for `h` in `0..len`.
///
/// Zero at the first hour, peaking at 1.0 in the middle and tapering towards zero
/// at the last hour.
pub fn half_sine_phase(len: usize) -> Vec<f64> {
    (0..len).map(|h| phase_at(h, len)).collect()
}

/// Phase value of local hour `h` in a window of `len` hours.
pub(crate) fn phase_at(h: usize, len: usize) -> f64 {
    (PI * h as f64 / len as f64).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn week_boundaries() {
        let phase = half_sine_phase(168);
        assert_eq!(phase.len(), 168);
        assert_eq!(phase[0], 0.0);
        assert!(phase[167] < 1e-2 && phase[167] > 0.0);
    }

    #[test]
    fn week_midpoint_is_peak() {
        let phase = half_sine_phase(168);
        assert_relative_eq!(phase[84], 1.0, epsilon = 1e-12);
        let max_idx = phase
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(max_idx, 84);
    }

    #[test]
    fn symmetric_about_midpoint() {
        let phase = half_sine_phase(216);
        for h in 1..108 {
            assert_relative_eq!(phase[108 - h], phase[108 + h], epsilon = 1e-12);
        }
    }

    #[test]
    fn empty() {
        assert!(half_sine_phase(0).is_empty());
    }
}
