use std::f64::consts::PI;

use ymg_core::errors::GapError;
use ymg_core::params::Params;
use ymg_model::{action_density, coupling, mass_gap, transition_metric, MASS_FLOOR};

#[test]
fn coupling_rejects_out_of_domain_coordinates() {
    let params = Params::default();
    for phi in [0.0, -0.1, 1.5] {
        let err = coupling(phi, &params).unwrap_err();
        assert!(matches!(err, GapError::Domain(_)), "phi = {phi}");
        let err = mass_gap(phi, &params).unwrap_err();
        assert!(matches!(err, GapError::Domain(_)), "phi = {phi}");
    }
}

#[test]
fn reference_scenario_uses_strong_branch() -> Result<(), GapError> {
    let params = Params::default();
    let g = coupling(0.5, &params)?;
    let expected_g = 0.25 * 0.5f64.powf(-11.0 / 3.0);
    assert!((g - expected_g).abs() < 1e-12);
    assert!(g > 1.0, "reference configuration must sit in the strong regime");

    let gap = mass_gap(0.5, &params)?;
    let expected_gap = 0.200 * expected_g * 2.8;
    assert!((gap - expected_gap).abs() < 1e-12);
    assert!(gap > 0.0);
    Ok(())
}

#[test]
fn regime_boundary_is_strictly_greater_than_one() -> Result<(), GapError> {
    // base_coupling * 0.5^(-2) == 1.0 exactly in binary floating point.
    let params = Params::default()
        .with_base_coupling(0.25)
        .with_exponent(2.0);
    let g = coupling(0.5, &params)?;
    assert_eq!(g, 1.0);

    let gap = mass_gap(0.5, &params)?;
    let weak_expected = params.scale * (-8.0 * PI * PI / 3.0).exp();
    let strong_expected = params.scale * 2.8;
    assert!((gap - weak_expected).abs() < 1e-15);
    assert!(
        (gap - strong_expected).abs() > 0.1,
        "g == 1.0 must not trigger the strong branch"
    );
    Ok(())
}

#[test]
fn deep_weak_regime_returns_exact_floor() -> Result<(), GapError> {
    // g = 0.1 at phi = 1 pushes the exponent argument far below -50.
    let params = Params::default()
        .with_base_coupling(0.1)
        .with_exponent(1.0);
    let gap = mass_gap(1.0, &params)?;
    assert_eq!(gap, MASS_FLOOR);
    Ok(())
}

#[test]
fn coupling_is_strictly_decreasing() -> Result<(), GapError> {
    let params = Params::default();
    let mut previous = f64::INFINITY;
    for idx in 1..=100 {
        let phi = idx as f64 / 100.0;
        let g = coupling(phi, &params)?;
        assert!(g < previous, "coupling must decrease at phi = {phi}");
        previous = g;
    }
    Ok(())
}

#[test]
fn mass_gap_is_strictly_positive_across_domain() -> Result<(), GapError> {
    let params = Params::default();
    for idx in 1..=1000 {
        let phi = idx as f64 / 1000.0;
        assert!(mass_gap(phi, &params)? > 0.0, "phi = {phi}");
    }
    Ok(())
}

#[test]
fn metric_crosses_midpoint_at_critical_coordinate() {
    let params = Params::default();
    assert_eq!(transition_metric(params.critical_coordinate, &params), 1.0);
    let below = transition_metric(0.49, &params);
    let at = transition_metric(0.50, &params);
    let above = transition_metric(0.51, &params);
    assert!(below < at && at < above);
}

#[test]
fn action_density_positive_for_positive_field_strength() -> Result<(), GapError> {
    let params = Params::default();
    let density = action_density(0.5, 1.0, &params)?;
    assert!(density > 0.0);
    let err = action_density(0.0, 1.0, &params).unwrap_err();
    assert!(matches!(err, GapError::Domain(_)));
    Ok(())
}
