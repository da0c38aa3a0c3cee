use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ymg_core::errors::{ErrorInfo, GapError};
use ymg_core::params::Params;
use ymg_core::serde::from_json_slice;

/// Optional per-field overrides read from a calibration file.
///
/// Unknown keys are rejected so a typo in a calibration file fails loudly
/// instead of silently keeping the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationOverrides {
    /// Overrides the mass scale.
    #[serde(default)]
    pub scale: Option<f64>,
    /// Overrides the coupling normalization.
    #[serde(default)]
    pub base_coupling: Option<f64>,
    /// Overrides the power-law exponent.
    #[serde(default)]
    pub exponent: Option<f64>,
    /// Overrides the gauge group size.
    #[serde(default)]
    pub group_size: Option<u32>,
    /// Overrides the flavor count.
    #[serde(default)]
    pub flavor_count: Option<u32>,
    /// Overrides the critical coordinate.
    #[serde(default)]
    pub critical_coordinate: Option<f64>,
}

/// Applies the overrides on top of a base parameter set.
pub fn apply_overrides(base: Params, overrides: &CalibrationOverrides) -> Params {
    Params {
        scale: overrides.scale.unwrap_or(base.scale),
        base_coupling: overrides.base_coupling.unwrap_or(base.base_coupling),
        exponent: overrides.exponent.unwrap_or(base.exponent),
        group_size: overrides.group_size.unwrap_or(base.group_size),
        flavor_count: overrides.flavor_count.unwrap_or(base.flavor_count),
        critical_coordinate: overrides
            .critical_coordinate
            .unwrap_or(base.critical_coordinate),
    }
}

/// Loads a calibration file and returns a validated parameter set.
///
/// The resulting parameters are validated eagerly here, at the boundary
/// where external values enter the system; the model itself only checks
/// coordinate domains.
pub fn load_calibration(path: &Path) -> Result<Params, GapError> {
    let bytes = fs::read(path).map_err(|err| {
        GapError::Calibration(
            ErrorInfo::new("calibration-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let overrides: CalibrationOverrides = from_json_slice(&bytes).map_err(|err| {
        GapError::Calibration(
            ErrorInfo::new("calibration-parse", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let params = apply_overrides(Params::default(), &overrides);
    params.validate()?;
    Ok(params)
}
