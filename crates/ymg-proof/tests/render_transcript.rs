use ymg_core::errors::GapError;
use ymg_proof::{render_document, render_transcript, Proof, ProofStep, Prover, TranscriptFormat};

fn sample_proof() -> Proof {
    Proof::new(
        "Sample: exponential positivity",
        vec!["x > 0".to_string()],
        vec![ProofStep::new("Observe exp(-8*pi**2/3) > 0.")],
        "The expression is positive.",
        true,
    )
}

#[test]
fn latex_transcript_escapes_pi_in_descriptions() -> Result<(), GapError> {
    let proof = sample_proof();
    let latex = render_transcript(&proof, TranscriptFormat::Latex)?;
    assert!(latex.contains("\\begin{proof}"));
    assert!(latex.contains("\\pi"));
    assert!(!latex.contains("*pi*"));
    assert!(latex.contains(&format!("% Proof hash: {}", proof.content_hash()?)));
    Ok(())
}

#[test]
fn plain_transcript_leaves_descriptions_untouched() -> Result<(), GapError> {
    let proof = sample_proof();
    let plain = render_transcript(&proof, TranscriptFormat::Plain)?;
    assert!(plain.contains("exp(-8*pi**2/3)"));
    assert!(!plain.contains("\\pi"));
    Ok(())
}

#[test]
fn escaping_does_not_change_the_hash() -> Result<(), GapError> {
    let proof = sample_proof();
    let before = proof.content_hash()?;
    render_transcript(&proof, TranscriptFormat::Latex)?;
    assert_eq!(proof.content_hash()?, before);
    Ok(())
}

#[test]
fn document_concatenates_with_section_headings() -> Result<(), GapError> {
    let prover = Prover::new();
    let proofs = prover.prove_all();
    let document = render_document(&proofs, TranscriptFormat::Latex)?;
    for proof in &proofs {
        assert!(document.contains(&format!("\\subsection*{{{}}}", proof.theorem)));
    }
    assert_eq!(document.matches("\\begin{proof}").count(), proofs.len());
    Ok(())
}
