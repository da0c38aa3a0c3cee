use serde::{Deserialize, Serialize};
use serde_json::Value;

use ymg_core::errors::{ErrorInfo, GapError};
use ymg_core::hash::stable_hash_string;
use ymg_core::serde::to_canonical_json_value;

/// One justification step inside a [`Proof`].
///
/// Purely descriptive: expression strings are rendered at construction time
/// and never re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Human readable description of the step.
    pub description: String,
    /// Optional rewrite rule that produced the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Optional expression state before the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Optional expression state after the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl ProofStep {
    /// Creates a bare descriptive step.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            rule: None,
            before: None,
            after: None,
        }
    }

    /// Records the rewrite rule that produced the step.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Records the before expression string.
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Records the after expression string.
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }
}

/// Immutable record of one symbolically derived lemma.
///
/// Value semantics only: two proofs with identical fields are
/// interchangeable and hash-equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// Theorem name.
    pub theorem: String,
    /// Ordered assumption strings.
    pub assumptions: Vec<String>,
    /// Ordered justification steps.
    pub steps: Vec<ProofStep>,
    /// Conclusion string.
    pub conclusion: String,
    /// Whether every lemma obligation was discharged.
    pub qed: bool,
}

impl Proof {
    /// Constructs a completed proof record.
    pub fn new(
        theorem: impl Into<String>,
        assumptions: Vec<String>,
        steps: Vec<ProofStep>,
        conclusion: impl Into<String>,
        qed: bool,
    ) -> Self {
        Self {
            theorem: theorem.into(),
            assumptions,
            steps,
            conclusion: conclusion.into(),
            qed,
        }
    }

    /// Returns the canonical JSON form used for hashing and serialization.
    ///
    /// Keys are sorted recursively; the hash field itself is excluded.
    pub fn to_canonical_form(&self) -> Result<Value, GapError> {
        to_canonical_json_value(self)
    }

    /// SHA-256 content fingerprint over the canonical JSON form.
    pub fn content_hash(&self) -> Result<String, GapError> {
        stable_hash_string(self)
    }

    /// Canonical JSON artifact including the `hash` field, as written to
    /// exported certificate files.
    pub fn to_artifact(&self) -> Result<Value, GapError> {
        let hash = self.content_hash()?;
        let mut value = self.to_canonical_form()?;
        if let Some(map) = value.as_object_mut() {
            map.insert("hash".to_string(), Value::String(hash));
        } else {
            return Err(GapError::Serde(ErrorInfo::new(
                "non-object-proof",
                "proof serialized to a non-object JSON value",
            )));
        }
        Ok(value)
    }
}
