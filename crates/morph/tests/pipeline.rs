use approx::assert_abs_diff_eq;
use revive_calendar::{AnalysisWindow, YearKind};
use revive_morph::{
    Extremum, MorphConfig, MorphError, MorphTarget, ReturnExtremes, Season, half_sine_phase,
    locate_extreme_weeks, morph_weather, morph_week,
};

/// Synthetic year: seasonal sine with a daily swing, dew-point a few degrees below.
fn synthetic_year(n: usize) -> (Vec<f64>, Vec<f64>) {
    let dry: Vec<f64> = (0..n)
        .map(|h| {
            let day = h as f64 / 24.0;
            let seasonal = 10.0 - 15.0 * (2.0 * std::f64::consts::PI * (day + 10.0) / 365.0).cos();
            let daily = 4.0 * (2.0 * std::f64::consts::PI * (h % 24) as f64 / 24.0).sin();
            seasonal + daily
        })
        .collect();
    let dew = dry.iter().map(|t| t - 4.0).collect();
    (dry, dew)
}

fn extremes() -> ReturnExtremes {
    ReturnExtremes::new()
        .with_winter_dry_bulb(-22.0)
        .with_winter_dew_point(-27.0)
        .with_summer_dry_bulb(36.0)
        // Higher than the summer dry-bulb target: forces dew-point violations.
        .with_summer_dew_point(40.0)
}

#[test]
fn morphed_year_hits_targets_and_respects_dew_point() {
    let year = YearKind::Standard;
    let (dry, dew) = synthetic_year(year.n_hours());
    let cold = AnalysisWindow::from_days((1, 15), (1, 21), year).unwrap();
    let hot = AnalysisWindow::from_days((7, 10), (7, 16), year).unwrap();
    let weeks = locate_extreme_weeks(cold, hot, year.n_hours(), 24).unwrap();

    let config = MorphConfig::default();
    let r = morph_weather(&dry, &dew, &weeks, &extremes(), &config).unwrap();

    assert_eq!(r.dry_bulb().len(), dry.len());
    assert_eq!(r.dew_point().len(), dew.len());

    // Dew-point never exceeds dry-bulb.
    for (h, (dp, db)) in r.dew_point().iter().zip(r.dry_bulb()).enumerate() {
        assert!(dp <= db, "hour {h}: dew-point {dp} > dry-bulb {db}");
    }
    assert!(r.dew_point_corrections() > 0);

    // Every factor converged on its core week.
    for season in [Season::Winter, Season::Summer] {
        for channel in [revive_morph::Channel::DryBulb, revive_morph::Channel::DewPoint] {
            let f = r.factors().get(season, channel);
            assert!(f.converged(), "{season} {channel} did not converge: {f:?}");
        }
    }

    // Hours outside both expanded windows are untouched.
    for h in 0..dry.len() {
        if !weeks.winter().expanded().contains(h) && !weeks.summer().expanded().contains(h) {
            assert_eq!(r.dry_bulb()[h], dry[h], "hour {h} changed");
        }
    }

    // Expanded window edges are continuous with the surrounding year.
    let start = weeks.winter().expanded().start();
    assert_eq!(r.dry_bulb()[start], dry[start]);
}

#[test]
fn constant_week_scenario() {
    let week = vec![-10.0; 168];
    let r = morph_week(
        &MorphTarget::new(-15.2, Extremum::Min),
        &week,
        &MorphConfig::default(),
    )
    .unwrap();
    assert_abs_diff_eq!(r.delta(), -5.2, epsilon = 0.01);
    let phase = half_sine_phase(168);
    let morphed_min = week
        .iter()
        .zip(&phase)
        .map(|(t, p)| t + r.delta() * p)
        .fold(f64::INFINITY, f64::min);
    assert_abs_diff_eq!(morphed_min, -15.2, epsilon = 0.01);
}

#[test]
fn far_target_is_capped_not_fatal() {
    let week = vec![0.0; 168];
    let r = morph_week(
        &MorphTarget::new(1e9, Extremum::Min),
        &week,
        &MorphConfig::default(),
    )
    .unwrap();
    assert_eq!(r.iterations(), 100);
    assert!(r.delta().is_finite());
}

#[test]
fn wrong_week_length_is_a_validation_error() {
    let year = YearKind::Standard;
    let cold = AnalysisWindow::from_days((1, 15), (1, 20), year).unwrap();
    let hot = AnalysisWindow::from_days((7, 10), (7, 16), year).unwrap();
    let err = locate_extreme_weeks(cold, hot, year.n_hours(), 24).unwrap_err();
    assert_eq!(
        err,
        MorphError::ExtremeWeekLength {
            season: Season::Winter,
            expected: 168,
            got: 144
        }
    );
}
