use std::collections::BTreeSet;

use crate::proof::{Proof, ProofStep};
use crate::rules::{apply_rules, default_rules};
use crate::symbolic::{Expr, Sign};

const PHI: &str = "phi";
const BASE_COUPLING: &str = "g0";
const EXPONENT: &str = "beta_exp";
const SCALE: &str = "Lambda";
const STRONG_FACTOR: &str = "c_strong";
const COUPLING: &str = "g";
const GROUP_SIZE: &str = "N";
const FLAVORS: &str = "n_f";

/// Symbolic lemma prover for the coupling and mass-gap formulas.
///
/// Declares one symbolic positive real per model parameter at construction
/// and never consults numeric parameter values. Every operation is
/// deterministic, reads no mutable state, and returns a fully formed
/// [`Proof`].
#[derive(Debug, Clone)]
pub struct Prover {
    positives: BTreeSet<String>,
}

impl Default for Prover {
    fn default() -> Self {
        Self::new()
    }
}

impl Prover {
    /// Declares the fixed symbolic variable set.
    pub fn new() -> Self {
        let positives = [
            PHI,
            BASE_COUPLING,
            EXPONENT,
            SCALE,
            STRONG_FACTOR,
            COUPLING,
            GROUP_SIZE,
        ]
        .into_iter()
        .map(str::to_string)
        .collect();
        Self { positives }
    }

    fn common_assumptions(&self) -> Vec<String> {
        vec![
            "phi ∈ (0,1]".to_string(),
            "g0 > 0".to_string(),
            "beta_exp > 0".to_string(),
            "Lambda > 0".to_string(),
            "c_strong > 0".to_string(),
        ]
    }

    /// The symbolic coupling formula g(φ) = g0 · φ^(−β_exp).
    fn coupling_expr(&self) -> Expr {
        Expr::sym(BASE_COUPLING) * Expr::sym(PHI).pow(-Expr::sym(EXPONENT))
    }

    /// Proves that the coupling is strictly positive on (0, 1].
    pub fn positivity_of_coupling(&self) -> Proof {
        let g_phi = self.coupling_expr().simplify();
        let mut steps = vec![ProofStep::new("Define g(φ) = g0 * φ^(−β_exp).")
            .with_after(g_phi.to_string())];

        let (exp_form, trace) = apply_rules(&g_phi, &default_rules(), 5);
        for application in &trace {
            steps.push(
                ProofStep::new("Rewrite the power into exponential form.")
                    .with_rule(application.rule)
                    .with_before(application.before.clone())
                    .with_after(application.after.clone()),
            );
        }
        steps.push(ProofStep::new(
            "Since g0>0 and exp(...)>0, the product is strictly positive on (0,1].",
        ));

        let qed = matches!(exp_form.sign(&self.positives), Some(Sign::Positive));
        Proof::new(
            "T1: Positivity of g(φ)",
            self.common_assumptions(),
            steps,
            "For φ∈(0,1], g(φ) > 0.",
            qed,
        )
    }

    /// Proves that the coupling is strictly decreasing on (0, 1].
    pub fn monotonicity_of_coupling(&self) -> Proof {
        let g_phi = self.coupling_expr().simplify();
        let derivative = g_phi.diff(PHI).simplify();

        let steps = vec![
            ProofStep::new("Differentiate g(φ) with respect to φ.")
                .with_rule("differentiate")
                .with_before(g_phi.to_string())
                .with_after(derivative.to_string()),
            ProofStep::new(
                "Since g0>0, β_exp>0, φ>0, then −β_exp*g0*φ^(−β_exp−1) < 0.",
            ),
        ];

        let qed = matches!(derivative.sign(&self.positives), Some(Sign::Negative));
        Proof::new(
            "T2: Monotonicity of g(φ)",
            self.common_assumptions(),
            steps,
            "g′(φ) < 0 on (0,1]; g(φ) is strictly decreasing.",
            qed,
        )
    }

    /// Proves that the two-regime mass expression is positive for every
    /// positive coupling value.
    pub fn positivity_of_mass_gap(&self) -> Proof {
        let g = Expr::sym(COUPLING);
        let strong = (Expr::sym(SCALE) * g.clone() * Expr::sym(STRONG_FACTOR)).simplify();
        let weak_argument = Expr::int(-8)
            * Expr::Pi.pow(Expr::int(2))
            * (Expr::int(3) * g.pow(Expr::int(2))).pow(Expr::int(-1));
        let weak = (Expr::sym(SCALE) * Expr::exp_of(weak_argument)).simplify();

        let strong_positive = matches!(strong.sign(&self.positives), Some(Sign::Positive));
        let weak_positive = matches!(weak.sign(&self.positives), Some(Sign::Positive));

        let steps = vec![
            ProofStep::new(
                "Strong regime (g>1): M = Λ * g * c_strong with Λ>0, g>0, c_strong>0 ⇒ M>0.",
            )
            .with_before(strong.to_string())
            .with_after("M>0"),
            ProofStep::new(
                "Weak regime (0<g≤1): M = Λ * exp(-8*pi**2/(3*g**2)), exp(...)>0 and Λ>0 ⇒ M>0.",
            )
            .with_before(weak.to_string())
            .with_after("M>0"),
        ];

        Proof::new(
            "T3: Positivity of mass gap M(g)",
            self.common_assumptions(),
            steps,
            "For all g>0, M(g) > 0; hence spectral positivity (mass gap) holds pointwise.",
            strong_positive && weak_positive,
        )
    }

    /// Proves that the one-loop beta function is negative for pure gauge
    /// theory with N ≥ 2.
    pub fn beta_function_negativity(&self) -> Proof {
        let b0 = Expr::rat(11, 3) * Expr::sym(GROUP_SIZE)
            + Expr::rat(-2, 3) * Expr::sym(FLAVORS);
        let b0_pure = b0.subs(FLAVORS, &Expr::int(0)).simplify();
        let beta = (-(b0_pure.clone()) * Expr::sym(COUPLING).pow(Expr::int(3))).simplify();

        let mut assumptions = self.common_assumptions();
        assumptions.push("N ≥ 2".to_string());
        assumptions.push("n_f = 0".to_string());

        let steps = vec![
            ProofStep::new("State the one-loop coefficient b0 = 11N/3 − 2n_f/3.")
                .with_after(b0.to_string()),
            ProofStep::new("Substitute n_f = 0 for pure gauge theory.")
                .with_rule("substitute")
                .with_before(b0.to_string())
                .with_after(b0_pure.to_string()),
            ProofStep::new("With N>0 we get b0 > 0, hence β(g) = −b0*g³ < 0 for g > 0.")
                .with_after(beta.to_string()),
        ];

        let qed = matches!(b0_pure.sign(&self.positives), Some(Sign::Positive))
            && matches!(beta.sign(&self.positives), Some(Sign::Negative));
        Proof::new(
            "T4: Negativity of the one-loop beta function",
            assumptions,
            steps,
            "For N ≥ 2 and n_f = 0, β(g) < 0: the coupling runs toward zero in the ultraviolet.",
            qed,
        )
    }

    /// Runs every lemma in fixed order.
    pub fn prove_all(&self) -> Vec<Proof> {
        vec![
            self.positivity_of_coupling(),
            self.monotonicity_of_coupling(),
            self.positivity_of_mass_gap(),
            self.beta_function_negativity(),
        ]
    }
}
