use std::fs;

use tempfile::tempdir;

use ymg_cli::{apply_overrides, generate_artifacts, load_calibration, CalibrationOverrides};
use ymg_core::errors::GapError;
use ymg_core::params::Params;

#[test]
fn calibration_overrides_selected_fields() -> Result<(), GapError> {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("calibration.json");
    fs::write(&path, r#"{"scale": 0.3, "exponent": 11.0}"#).unwrap();

    let params = load_calibration(&path)?;
    assert_eq!(params.scale, 0.3);
    assert_eq!(params.exponent, 11.0);
    assert_eq!(params.base_coupling, Params::default().base_coupling);
    Ok(())
}

#[test]
fn non_positive_override_is_rejected_eagerly() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("calibration.json");
    fs::write(&path, r#"{"scale": -1.0}"#).unwrap();

    let err = load_calibration(&path).unwrap_err();
    assert!(matches!(err, GapError::Calibration(_)));
}

#[test]
fn unknown_calibration_key_is_rejected() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("calibration.json");
    fs::write(&path, r#"{"scael": 0.3}"#).unwrap();

    let err = load_calibration(&path).unwrap_err();
    assert!(matches!(err, GapError::Calibration(_)));
}

#[test]
fn empty_overrides_keep_defaults() {
    let params = apply_overrides(Params::default(), &CalibrationOverrides::default());
    assert_eq!(params, Params::default());
}

#[test]
fn artifacts_are_written_with_stable_hashes() -> Result<(), GapError> {
    let tmp = tempdir().unwrap();
    let (paths, hashes) = generate_artifacts(&Params::default(), tmp.path())?;
    assert!(paths.certificates.is_file());
    assert!(paths.transcripts.is_file());
    assert!(paths.sweep.is_file());
    assert_eq!(hashes.len(), 4);

    let (_, hashes_again) = generate_artifacts(&Params::default(), tmp.path())?;
    assert_eq!(hashes, hashes_again);

    let document = fs::read_to_string(&paths.transcripts).unwrap();
    assert!(document.contains("\\begin{proof}"));
    Ok(())
}
