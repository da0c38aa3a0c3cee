#![deny(missing_docs)]
#![doc = "Boundary-coordinate coupling, mass-gap, and transition-metric model."]

/// Pure model functions and calibration constants.
pub mod model;
/// Deterministic coordinate sweeps.
pub mod sweep;

pub use model::{
    action_density, coupling, mass_gap, transition_metric, MASS_FLOOR, STRONG_FACTOR,
    UNDERFLOW_EXPONENT,
};
pub use sweep::{sweep_mass_gap, SweepOpts, SweepReport, SweepSample};
