#![deny(missing_docs)]
#![doc = "Symbolic lemma prover, content-hashed proof records, and transcript rendering."]

/// Lemma prover operating on symbolic positive reals.
pub mod engine;
/// Immutable proof records with canonical hashing.
pub mod proof;
/// Transcript rendering in plain and LaTeX form.
pub mod render;
/// Deterministic rewrite rules.
pub mod rules;
/// Exact symbolic expression kernel.
pub mod symbolic;

pub use engine::Prover;
pub use proof::{Proof, ProofStep};
pub use render::{render_document, render_transcript, TranscriptFormat};
pub use rules::{apply_rules, default_rules, Rule, RuleApplication};
pub use symbolic::{Expr, Rational, Sign};
