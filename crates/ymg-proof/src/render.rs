use ymg_core::errors::GapError;

use crate::proof::Proof;

/// Output format for proof transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    /// Line-oriented plain text.
    Plain,
    /// LaTeX proof environment.
    Latex,
}

fn escape_description(description: &str, format: TranscriptFormat) -> String {
    match format {
        TranscriptFormat::Plain => description.to_string(),
        // Display-only escaping; the content hash is computed over the
        // unescaped fields.
        TranscriptFormat::Latex => description.replace("pi", "\\pi"),
    }
}

/// Renders one proof as a line-oriented transcript.
///
/// The trailing comment line carries the content hash, which is computed
/// over the pre-escaped proof fields.
pub fn render_transcript(proof: &Proof, format: TranscriptFormat) -> Result<String, GapError> {
    let hash = proof.content_hash()?;
    let mut lines = Vec::new();
    match format {
        TranscriptFormat::Latex => {
            lines.push(format!("% Theorem: {}", proof.theorem));
            lines.push("\\begin{proof}".to_string());
            if !proof.assumptions.is_empty() {
                lines.push(format!("Assumptions: {}.", proof.assumptions.join("; ")));
            }
            for step in &proof.steps {
                lines.push(format!(
                    "{} \\\\",
                    escape_description(&step.description, format)
                ));
            }
            lines.push(format!("Conclusion: {}", proof.conclusion));
            lines.push("\\end{proof}".to_string());
            lines.push(format!("% Proof hash: {hash}"));
        }
        TranscriptFormat::Plain => {
            lines.push(format!("Theorem: {}", proof.theorem));
            if !proof.assumptions.is_empty() {
                lines.push(format!("Assumptions: {}.", proof.assumptions.join("; ")));
            }
            for step in &proof.steps {
                lines.push(format!("  - {}", step.description));
            }
            lines.push(format!("Conclusion: {}", proof.conclusion));
            lines.push(format!("# Proof hash: {hash}"));
        }
    }
    Ok(lines.join("\n"))
}

/// Concatenates multiple transcripts, each preceded by a section heading
/// built from the theorem name.
pub fn render_document(proofs: &[Proof], format: TranscriptFormat) -> Result<String, GapError> {
    let mut body = Vec::new();
    for proof in proofs {
        match format {
            TranscriptFormat::Latex => {
                body.push(format!("\\subsection*{{{}}}", proof.theorem));
            }
            TranscriptFormat::Plain => {
                body.push(format!("== {} ==", proof.theorem));
            }
        }
        body.push(render_transcript(proof, format)?);
        body.push(String::new());
    }
    Ok(body.join("\n"))
}
