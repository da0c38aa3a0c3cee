use serde::{Deserialize, Serialize};

use ymg_core::errors::{ErrorInfo, GapError};
use ymg_core::hash::{round_f64, stable_hash_string};
use ymg_core::params::Params;

use crate::model::{coupling, mass_gap, transition_metric};

fn sweep_error(code: &str, message: impl Into<String>) -> GapError {
    GapError::Domain(ErrorInfo::new(code, message.into()))
}

/// Options controlling a coordinate sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepOpts {
    /// First coordinate of the uniform grid.
    pub start: f64,
    /// Last coordinate of the uniform grid.
    pub end: f64,
    /// Number of grid points.
    pub points: usize,
}

impl Default for SweepOpts {
    fn default() -> Self {
        Self {
            start: 0.1,
            end: 0.9,
            points: 100,
        }
    }
}

impl SweepOpts {
    /// Returns a sanitised configuration with at least two grid points.
    pub fn sanitised(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
            points: self.points.max(2),
        }
    }
}

/// One sampled point of a coordinate sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    /// Boundary coordinate of the sample.
    pub phi: f64,
    /// Running coupling at the coordinate.
    pub coupling: f64,
    /// Mass gap (GeV) at the coordinate.
    pub mass_gap: f64,
    /// Transition metric at the coordinate.
    pub metric: f64,
}

/// Deterministic sweep report with a content-addressed hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Sampled points in grid order.
    pub samples: Vec<SweepSample>,
    /// Minimum mass gap observed across the sweep.
    pub min_mass_gap: f64,
    /// Whether every sampled mass gap was strictly positive.
    pub all_positive: bool,
    /// Number of grid points skipped because they fell outside `(0, 1]`.
    pub skipped: usize,
    /// Options that produced the report.
    pub opts: SweepOpts,
    /// Stable hash of the sweep payload.
    pub sweep_hash: String,
}

/// Samples the model over a uniform coordinate grid.
///
/// Grid points outside the valid domain are skipped individually rather than
/// failing the whole sweep; a sweep whose grid contains no valid point is an
/// error.
pub fn sweep_mass_gap(opts: &SweepOpts, params: &Params) -> Result<SweepReport, GapError> {
    let opts = opts.sanitised();
    let step = (opts.end - opts.start) / (opts.points - 1) as f64;

    let mut samples = Vec::new();
    let mut skipped = 0usize;
    for idx in 0..opts.points {
        let phi = opts.start + step * idx as f64;
        let g = match coupling(phi, params) {
            Ok(g) => g,
            Err(GapError::Domain(_)) => {
                skipped += 1;
                continue;
            }
            Err(other) => return Err(other),
        };
        let gap = mass_gap(phi, params)?;
        samples.push(SweepSample {
            phi: round_f64(phi),
            coupling: round_f64(g),
            mass_gap: gap,
            metric: round_f64(transition_metric(phi, params)),
        });
    }

    if samples.is_empty() {
        return Err(sweep_error(
            "empty-sweep",
            "sweep grid contained no coordinate inside (0, 1]",
        ));
    }

    let min_mass_gap = samples
        .iter()
        .map(|sample| sample.mass_gap)
        .fold(f64::INFINITY, f64::min);
    let all_positive = samples.iter().all(|sample| sample.mass_gap > 0.0);
    let sweep_hash = stable_hash_string(&(&samples, min_mass_gap, all_positive, skipped, &opts))?;

    Ok(SweepReport {
        samples,
        min_mass_gap,
        all_positive,
        skipped,
        opts,
        sweep_hash,
    })
}
