use std::fs;
use std::path::{Path, PathBuf};

use ymg_core::errors::{ErrorInfo, GapError};
use ymg_core::params::Params;
use ymg_core::serde::to_canonical_json_bytes;
use ymg_model::{sweep_mass_gap, SweepOpts};
use ymg_proof::{render_document, Prover, TranscriptFormat};

fn io_error(code: &str, err: impl ToString, path: &Path) -> GapError {
    GapError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Locations of the files written by [`generate_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// JSON certificate array, one entry per proof, each carrying its hash.
    pub certificates: PathBuf,
    /// LaTeX transcript document.
    pub transcripts: PathBuf,
    /// Canonical JSON sweep report.
    pub sweep: PathBuf,
}

/// Runs every lemma and a reference sweep, writing all artifacts under the
/// provided directory. Returns the written paths and the proof hashes in
/// lemma order.
pub fn generate_artifacts(
    params: &Params,
    out_dir: &Path,
) -> Result<(ArtifactPaths, Vec<String>), GapError> {
    fs::create_dir_all(out_dir).map_err(|err| io_error("mkdir", err, out_dir))?;

    let prover = Prover::new();
    let proofs = prover.prove_all();

    let mut artifacts = Vec::new();
    let mut hashes = Vec::new();
    for proof in &proofs {
        artifacts.push(proof.to_artifact()?);
        hashes.push(proof.content_hash()?);
    }

    let paths = ArtifactPaths {
        certificates: out_dir.join("proofs_phi_scheme.json"),
        transcripts: out_dir.join("proofs_phi_scheme.tex"),
        sweep: out_dir.join("sweep_report.json"),
    };

    let certificate_bytes = serde_json::to_vec_pretty(&artifacts).map_err(|err| {
        GapError::Serde(ErrorInfo::new("certificate-encode", err.to_string()))
    })?;
    fs::write(&paths.certificates, certificate_bytes)
        .map_err(|err| io_error("write-certificates", err, &paths.certificates))?;

    let document = render_document(&proofs, TranscriptFormat::Latex)?;
    fs::write(&paths.transcripts, document)
        .map_err(|err| io_error("write-transcripts", err, &paths.transcripts))?;

    let sweep = sweep_mass_gap(&SweepOpts::default(), params)?;
    let sweep_bytes = to_canonical_json_bytes(&sweep)?;
    fs::write(&paths.sweep, sweep_bytes).map_err(|err| io_error("write-sweep", err, &paths.sweep))?;

    Ok((paths, hashes))
}
