use std::path::PathBuf;

use clap::Parser;

use ymg_cli::Cli;

#[test]
fn defaults_to_artifacts_directory() {
    let cli = Cli::try_parse_from(["ymg"]).unwrap();
    assert_eq!(cli.out, PathBuf::from("artifacts"));
    assert!(cli.calibration.is_none());
}

#[test]
fn parses_calibration_and_out_flags() {
    let cli = Cli::try_parse_from(["ymg", "--calibration", "cal.json", "--out", "reports"]).unwrap();
    assert_eq!(cli.calibration, Some(PathBuf::from("cal.json")));
    assert_eq!(cli.out, PathBuf::from("reports"));
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["ymg", "--bogus"]).is_err());
}

#[test]
fn missing_flag_value_is_rejected() {
    assert!(Cli::try_parse_from(["ymg", "--calibration"]).is_err());
}
