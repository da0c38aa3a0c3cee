use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GapError};

/// Immutable parameter set consumed by the numeric model.
///
/// `group_size` and `flavor_count` are carried for the symbolic beta-function
/// lemma only; the numeric model never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Overall mass unit in GeV (the confinement scale).
    pub scale: f64,
    /// Coupling normalization at the infrared endpoint.
    pub base_coupling: f64,
    /// Power-law exponent of the coupling formula.
    pub exponent: f64,
    /// Gauge group size N for SU(N).
    pub group_size: u32,
    /// Number of fermion flavors.
    pub flavor_count: u32,
    /// Boundary coordinate at which the transition metric crosses its midpoint.
    pub critical_coordinate: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            scale: 0.200,
            base_coupling: 0.25,
            exponent: 11.0 / 3.0,
            group_size: 3,
            flavor_count: 0,
            critical_coordinate: 0.5,
        }
    }
}

fn params_error(field: &str, value: f64, requirement: &str) -> GapError {
    GapError::Calibration(
        ErrorInfo::new(
            "invalid-parameter",
            format!("parameter `{field}` must be {requirement}"),
        )
        .with_context(field, format!("{value}")),
    )
}

impl Params {
    /// Returns a copy with the mass scale replaced.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy with the coupling normalization replaced.
    pub fn with_base_coupling(mut self, base_coupling: f64) -> Self {
        self.base_coupling = base_coupling;
        self
    }

    /// Returns a copy with the power-law exponent replaced.
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Returns a copy with the critical coordinate replaced.
    pub fn with_critical_coordinate(mut self, critical_coordinate: f64) -> Self {
        self.critical_coordinate = critical_coordinate;
        self
    }

    /// Checks the positivity invariants eagerly.
    ///
    /// Construction itself stays unvalidated; callers that accept external
    /// overrides (the calibration loader) invoke this at the boundary, while
    /// the model functions rely on their own coordinate domain checks.
    pub fn validate(&self) -> Result<(), GapError> {
        if !(self.scale > 0.0) {
            return Err(params_error("scale", self.scale, "strictly positive"));
        }
        if !(self.base_coupling > 0.0) {
            return Err(params_error(
                "base_coupling",
                self.base_coupling,
                "strictly positive",
            ));
        }
        if !(self.exponent > 0.0) {
            return Err(params_error("exponent", self.exponent, "strictly positive"));
        }
        if !(self.critical_coordinate > 0.0 && self.critical_coordinate < 1.0) {
            return Err(params_error(
                "critical_coordinate",
                self.critical_coordinate,
                "inside (0, 1)",
            ));
        }
        Ok(())
    }
}
