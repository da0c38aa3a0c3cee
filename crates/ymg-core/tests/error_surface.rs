use ymg_core::errors::{ErrorInfo, GapError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("coordinate", "1.5")
        .with_hint("pass a coordinate inside (0, 1]")
}

#[test]
fn domain_error_surface() {
    let err = GapError::Domain(sample_info("coordinate-out-of-domain", "out of domain"));
    assert_eq!(err.info().code, "coordinate-out-of-domain");
    assert!(err.info().context.contains_key("coordinate"));
    assert!(err.to_string().starts_with("domain error:"));
}

#[test]
fn calibration_error_surface() {
    let err = GapError::Calibration(sample_info("invalid-parameter", "bad scale"));
    assert_eq!(err.info().code, "invalid-parameter");
    assert!(err.to_string().contains("hint"));
}

#[test]
fn error_serializes_with_family_tag() {
    let err = GapError::Serde(ErrorInfo::new("json-encode", "boom"));
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["family"], "Serde");
    assert_eq!(value["detail"]["code"], "json-encode");
}
