use crate::symbolic::Expr;

/// Named deterministic rewrite rule.
///
/// A rule either produces a rewritten expression or declines by returning
/// `None`; it never fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable rule identifier recorded in proof steps.
    pub name: &'static str,
    apply: fn(&Expr) -> Option<Expr>,
}

impl Rule {
    /// Applies the rule to the provided expression.
    pub fn apply(&self, expr: &Expr) -> Option<Expr> {
        (self.apply)(expr)
    }
}

fn pow_to_exp(expr: &Expr) -> Option<Expr> {
    match expr {
        // a**b -> exp(b*log(a)); engine symbols are positive reals, so the
        // rewrite is sound for symbolic and positive numeric bases.
        Expr::Pow(base, exponent) => match base.as_ref() {
            Expr::Sym(_) | Expr::Pi => Some(Expr::exp_of(
                (*exponent.clone()) * Expr::log_of(*base.clone()),
            )),
            Expr::Num(value) if value.num > 0 => Some(Expr::exp_of(
                (*exponent.clone()) * Expr::log_of(*base.clone()),
            )),
            _ => None,
        },
        Expr::Mul(factors) => {
            for (idx, factor) in factors.iter().enumerate() {
                if let Some(rewritten) = pow_to_exp(factor) {
                    let mut next = factors.clone();
                    next[idx] = rewritten;
                    return Some(Expr::Mul(next));
                }
            }
            None
        }
        _ => None,
    }
}

fn fold_constants(expr: &Expr) -> Option<Expr> {
    let simplified = expr.simplify();
    if simplified == *expr {
        None
    } else {
        Some(simplified)
    }
}

/// Default rule set applied by the prover, in application order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "pow_to_exp",
            apply: pow_to_exp,
        },
        Rule {
            name: "fold_constants",
            apply: fold_constants,
        },
    ]
}

/// One recorded rewrite produced by [`apply_rules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleApplication {
    /// Name of the rule that fired.
    pub rule: &'static str,
    /// Rendered expression before the rewrite.
    pub before: String,
    /// Rendered expression after the rewrite.
    pub after: String,
}

/// Applies the rules round-robin for a bounded number of passes.
///
/// Returns the final expression together with the ordered rewrite trace.
/// Deterministic for identical inputs.
pub fn apply_rules(expr: &Expr, rules: &[Rule], max_passes: usize) -> (Expr, Vec<RuleApplication>) {
    let mut current = expr.clone();
    let mut trace = Vec::new();
    for _ in 0..max_passes {
        let mut changed_any = false;
        for rule in rules {
            if let Some(next) = rule.apply(&current) {
                if next != current {
                    trace.push(RuleApplication {
                        rule: rule.name,
                        before: current.to_string(),
                        after: next.to_string(),
                    });
                    current = next;
                    changed_any = true;
                }
            }
        }
        if !changed_any {
            break;
        }
    }
    (current, trace)
}
