use std::f64::consts::PI;

use ymg_core::errors::{ErrorInfo, GapError};
use ymg_core::params::Params;

/// Calibration constant applied in the strong-coupling branch of the mass
/// formula (matched to the lightest glueball in the reference configuration).
pub const STRONG_FACTOR: f64 = 2.8;

/// Exponent threshold below which the weak-regime exponential is floored.
pub const UNDERFLOW_EXPONENT: f64 = -50.0;

/// Floor value returned instead of evaluating a deeply suppressed exponential.
pub const MASS_FLOOR: f64 = 1e-9;

fn domain_error(phi: f64) -> GapError {
    GapError::Domain(
        ErrorInfo::new(
            "coordinate-out-of-domain",
            format!("boundary coordinate must lie in (0, 1], got {phi}"),
        )
        .with_context("coordinate", format!("{phi}")),
    )
}

/// Evaluates the running coupling at the provided boundary coordinate.
///
/// The power is negative by convention: the coupling grows toward the
/// infrared endpoint `phi = 1` and decays toward `phi -> 0`. The coordinate
/// domain `(0, 1]` is a hard precondition; out-of-domain values fail with
/// [`GapError::Domain`] rather than being clamped, because the regime split
/// in [`mass_gap`] depends on exact domain membership.
pub fn coupling(phi: f64, params: &Params) -> Result<f64, GapError> {
    if !(phi > 0.0 && phi <= 1.0) {
        return Err(domain_error(phi));
    }
    Ok(params.base_coupling * phi.powf(-params.exponent))
}

/// Evaluates the mass gap (GeV) at the provided boundary coordinate.
///
/// Strong regime (`g > 1`, strictly): linear in the coupling,
/// `scale * g * STRONG_FACTOR`. Weak regime (`0 < g <= 1`): exponentially
/// suppressed, `scale * exp(-8 pi^2 / (3 g^2))`, floored at [`MASS_FLOOR`]
/// once the exponent argument drops to [`UNDERFLOW_EXPONENT`] or below so the
/// result never underflows to zero. Strictly positive for every valid input.
pub fn mass_gap(phi: f64, params: &Params) -> Result<f64, GapError> {
    let g = coupling(phi, params)?;
    if g > 1.0 {
        return Ok(params.scale * g * STRONG_FACTOR);
    }
    let exponent_arg = -8.0 * PI * PI / (3.0 * g * g);
    if exponent_arg > UNDERFLOW_EXPONENT {
        Ok(params.scale * exponent_arg.exp())
    } else {
        Ok(MASS_FLOOR)
    }
}

/// Smooth transition indicator around the critical coordinate.
///
/// Interpolates from near 0 well below the critical coordinate to near 2
/// well above it, crossing 1 exactly at the critical coordinate. Total over
/// all reals; only `(0, 1]` is semantically meaningful.
pub fn transition_metric(phi: f64, params: &Params) -> f64 {
    1.0 + (10.0 * (phi - params.critical_coordinate)).tanh()
}

/// Action density `metric * F^2 / (4 g^2)` at the provided coordinate.
pub fn action_density(phi: f64, f_squared: f64, params: &Params) -> Result<f64, GapError> {
    let g = coupling(phi, params)?;
    let metric = transition_metric(phi, params);
    Ok(metric * f_squared / (4.0 * g * g))
}
