use ymg_core::errors::GapError;
use ymg_core::params::Params;
use ymg_model::{sweep_mass_gap, SweepOpts};

#[test]
fn sweeps_are_deterministic() -> Result<(), GapError> {
    let params = Params::default();
    let opts = SweepOpts::default();
    let report_a = sweep_mass_gap(&opts, &params)?;
    let report_b = sweep_mass_gap(&opts, &params)?;
    assert_eq!(report_a, report_b);
    assert_eq!(report_a.sweep_hash, report_b.sweep_hash);
    assert!(report_a.all_positive);
    assert!(report_a.min_mass_gap > 0.0);
    assert_eq!(report_a.skipped, 0);
    Ok(())
}

#[test]
fn out_of_domain_grid_points_are_skipped_per_sample() -> Result<(), GapError> {
    let params = Params::default();
    let opts = SweepOpts {
        start: -0.5,
        end: 0.5,
        points: 100,
    };
    let report = sweep_mass_gap(&opts, &params)?;
    assert!(report.skipped > 0);
    assert!(!report.samples.is_empty());
    assert!(report.samples.iter().all(|sample| sample.phi > 0.0));
    Ok(())
}

#[test]
fn fully_invalid_grid_is_an_error() {
    let params = Params::default();
    let opts = SweepOpts {
        start: 1.2,
        end: 1.8,
        points: 10,
    };
    let err = sweep_mass_gap(&opts, &params).unwrap_err();
    assert!(matches!(err, GapError::Domain(_)));
}

#[test]
fn single_point_request_is_sanitised() -> Result<(), GapError> {
    let params = Params::default();
    let opts = SweepOpts {
        start: 0.2,
        end: 0.8,
        points: 0,
    };
    let report = sweep_mass_gap(&opts, &params)?;
    assert_eq!(report.samples.len(), 2);
    Ok(())
}
