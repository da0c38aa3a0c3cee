#![deny(missing_docs)]
#![doc = "Calibration loading and artifact generation for the ymgap toolkit."]

/// Calibration override loading.
pub mod calibrate;
/// Command line options.
pub mod opts;
/// Artifact generation helpers shared with the binary.
pub mod run;

pub use calibrate::{apply_overrides, load_calibration, CalibrationOverrides};
pub use opts::Cli;
pub use run::{generate_artifacts, ArtifactPaths};
