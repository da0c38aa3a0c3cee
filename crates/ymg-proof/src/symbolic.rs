use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// Number of normalization passes applied by [`Expr::simplify`].
const MAX_SIMPLIFY_PASSES: usize = 5;

/// Exact rational constant used inside symbolic expressions.
///
/// The denominator is never zero: [`Rational::new`] debug-asserts against a
/// zero denominator and falls back to the integer numerator in release
/// builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    /// Numerator, carries the sign.
    pub num: i64,
    /// Denominator, always positive.
    pub den: i64,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.abs().max(1)
}

impl Rational {
    /// Constructs a normalized rational.
    pub fn new(num: i64, den: i64) -> Self {
        debug_assert!(den != 0, "denominator must be non-zero");
        let den = if den == 0 { 1 } else { den };
        let sign = if den < 0 { -1 } else { 1 };
        let divisor = gcd(num, den);
        Self {
            num: sign * num / divisor,
            den: sign * den / divisor,
        }
    }

    /// Constructs an integer constant.
    pub fn int(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    /// Whether the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Whether the value is exactly one.
    pub fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    fn add(self, other: Self) -> Self {
        Self::new(self.num * other.den + other.num * self.den, self.den * other.den)
    }

    fn mul(self, other: Self) -> Self {
        Self::new(self.num * other.num, self.den * other.den)
    }

    fn pow_int(self, exponent: i64) -> Option<Self> {
        if !(0..=8).contains(&exponent.abs()) {
            return None;
        }
        let mut value = Self::int(1);
        for _ in 0..exponent.abs() {
            value = value.mul(self);
        }
        if exponent < 0 {
            if value.num == 0 {
                return None;
            }
            value = Self::new(value.den * value.num.signum(), value.num.abs());
        }
        Some(value)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Sign classification produced by the conservative positivity analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Strictly positive for every admissible assignment.
    Positive,
    /// Strictly negative for every admissible assignment.
    Negative,
    /// Identically zero.
    Zero,
}

/// Exact symbolic expression tree.
///
/// The capability set is deliberately narrow: differentiate, substitute,
/// simplify, and render to string. Simplification is best-effort and never
/// fails; an expression the rewriter cannot reduce renders as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Exact rational constant.
    Num(Rational),
    /// Named symbol.
    Sym(String),
    /// The circle constant.
    Pi,
    /// Sum of terms.
    Add(Vec<Expr>),
    /// Product of factors.
    Mul(Vec<Expr>),
    /// `base ** exponent`.
    Pow(Box<Expr>, Box<Expr>),
    /// Natural exponential.
    Exp(Box<Expr>),
    /// Natural logarithm.
    Log(Box<Expr>),
}

impl Expr {
    /// Integer constant.
    pub fn int(value: i64) -> Self {
        Expr::Num(Rational::int(value))
    }

    /// Rational constant.
    pub fn rat(num: i64, den: i64) -> Self {
        Expr::Num(Rational::new(num, den))
    }

    /// Named symbol.
    pub fn sym(name: impl Into<String>) -> Self {
        Expr::Sym(name.into())
    }

    /// Raises the expression to the provided power.
    pub fn pow(self, exponent: Expr) -> Self {
        Expr::Pow(Box::new(self), Box::new(exponent))
    }

    /// Natural exponential of the provided argument.
    pub fn exp_of(argument: Expr) -> Self {
        Expr::Exp(Box::new(argument))
    }

    /// Natural logarithm of the provided argument.
    pub fn log_of(argument: Expr) -> Self {
        Expr::Log(Box::new(argument))
    }

    /// Whether the expression mentions the named symbol.
    pub fn contains(&self, var: &str) -> bool {
        match self {
            Expr::Num(_) | Expr::Pi => false,
            Expr::Sym(name) => name == var,
            Expr::Add(terms) | Expr::Mul(terms) => terms.iter().any(|term| term.contains(var)),
            Expr::Pow(base, exponent) => base.contains(var) || exponent.contains(var),
            Expr::Exp(inner) | Expr::Log(inner) => inner.contains(var),
        }
    }

    /// Substitutes every occurrence of the named symbol with the replacement.
    pub fn subs(&self, var: &str, replacement: &Expr) -> Expr {
        match self {
            Expr::Num(_) | Expr::Pi => self.clone(),
            Expr::Sym(name) => {
                if name == var {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Expr::Add(terms) => {
                Expr::Add(terms.iter().map(|term| term.subs(var, replacement)).collect())
            }
            Expr::Mul(factors) => Expr::Mul(
                factors
                    .iter()
                    .map(|factor| factor.subs(var, replacement))
                    .collect(),
            ),
            Expr::Pow(base, exponent) => base
                .subs(var, replacement)
                .pow(exponent.subs(var, replacement)),
            Expr::Exp(inner) => Expr::exp_of(inner.subs(var, replacement)),
            Expr::Log(inner) => Expr::log_of(inner.subs(var, replacement)),
        }
    }

    /// Differentiates with respect to the named symbol.
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Num(_) | Expr::Pi => Expr::int(0),
            Expr::Sym(name) => {
                if name == var {
                    Expr::int(1)
                } else {
                    Expr::int(0)
                }
            }
            Expr::Add(terms) => Expr::Add(terms.iter().map(|term| term.diff(var)).collect()),
            Expr::Mul(factors) => {
                let mut terms = Vec::new();
                for idx in 0..factors.len() {
                    let mut product = Vec::new();
                    for (jdx, factor) in factors.iter().enumerate() {
                        if jdx == idx {
                            product.push(factor.diff(var));
                        } else {
                            product.push(factor.clone());
                        }
                    }
                    terms.push(Expr::Mul(product));
                }
                Expr::Add(terms)
            }
            Expr::Pow(base, exponent) => {
                if !exponent.contains(var) {
                    // Power rule: c * base^(c - 1) * base'.
                    (*exponent.clone())
                        * base.clone().pow((*exponent.clone()) + Expr::int(-1))
                        * base.diff(var)
                } else {
                    // General rule via b^e = exp(e log b).
                    self.clone()
                        * (exponent.diff(var) * Expr::log_of(*base.clone())
                            + (*exponent.clone())
                                * base.diff(var)
                                * base.clone().pow(Expr::int(-1)))
                }
            }
            Expr::Exp(inner) => Expr::exp_of(*inner.clone()) * inner.diff(var),
            Expr::Log(inner) => inner.diff(var) * inner.clone().pow(Expr::int(-1)),
        }
    }

    fn normalize(&self) -> Expr {
        match self {
            Expr::Num(_) | Expr::Sym(_) | Expr::Pi => self.clone(),
            Expr::Add(terms) => {
                let mut flat = Vec::new();
                let mut constant = Rational::int(0);
                for term in terms {
                    match term.normalize() {
                        Expr::Add(nested) => {
                            for item in nested {
                                if let Expr::Num(value) = item {
                                    constant = constant.add(value);
                                } else {
                                    flat.push(item);
                                }
                            }
                        }
                        Expr::Num(value) => constant = constant.add(value),
                        other => flat.push(other),
                    }
                }
                if !constant.is_zero() {
                    flat.push(Expr::Num(constant));
                }
                match flat.len() {
                    0 => Expr::int(0),
                    1 => flat.into_iter().next().unwrap_or_else(|| Expr::int(0)),
                    _ => Expr::Add(flat),
                }
            }
            Expr::Mul(factors) => {
                let mut flat = Vec::new();
                let mut constant = Rational::int(1);
                for factor in factors {
                    match factor.normalize() {
                        Expr::Mul(nested) => {
                            for item in nested {
                                if let Expr::Num(value) = item {
                                    constant = constant.mul(value);
                                } else {
                                    flat.push(item);
                                }
                            }
                        }
                        Expr::Num(value) => constant = constant.mul(value),
                        other => flat.push(other),
                    }
                }
                if constant.is_zero() {
                    return Expr::int(0);
                }
                if !constant.is_one() {
                    flat.insert(0, Expr::Num(constant));
                }
                match flat.len() {
                    0 => Expr::int(1),
                    1 => flat.into_iter().next().unwrap_or_else(|| Expr::int(1)),
                    _ => Expr::Mul(flat),
                }
            }
            Expr::Pow(base, exponent) => {
                let base = base.normalize();
                let exponent = exponent.normalize();
                if let Expr::Num(value) = &exponent {
                    if value.is_zero() {
                        return Expr::int(1);
                    }
                    if value.is_one() {
                        return base;
                    }
                    if let Expr::Num(base_value) = &base {
                        if value.den == 1 {
                            if let Some(folded) = base_value.pow_int(value.num) {
                                return Expr::Num(folded);
                            }
                        }
                    }
                }
                if let Expr::Pow(inner_base, inner_exponent) = &base {
                    let merged = (*inner_exponent.clone()) * exponent;
                    return inner_base.as_ref().clone().pow(merged).normalize();
                }
                base.pow(exponent)
            }
            Expr::Exp(inner) => {
                let inner = inner.normalize();
                match inner {
                    Expr::Num(value) if value.is_zero() => Expr::int(1),
                    Expr::Log(argument) => *argument,
                    other => Expr::exp_of(other),
                }
            }
            Expr::Log(inner) => {
                let inner = inner.normalize();
                match inner {
                    Expr::Num(value) if value.is_one() => Expr::int(0),
                    Expr::Exp(argument) => *argument,
                    other => Expr::log_of(other),
                }
            }
        }
    }

    /// Best-effort simplification with a bounded number of rewrite passes.
    pub fn simplify(&self) -> Expr {
        let mut current = self.clone();
        for _ in 0..MAX_SIMPLIFY_PASSES {
            let next = current.normalize();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// Conservative sign analysis given a set of symbols assumed strictly
    /// positive. Returns `None` when the sign cannot be certified.
    pub fn sign(&self, positives: &BTreeSet<String>) -> Option<Sign> {
        match self {
            Expr::Num(value) => Some(match value.num {
                n if n > 0 => Sign::Positive,
                n if n < 0 => Sign::Negative,
                _ => Sign::Zero,
            }),
            Expr::Pi => Some(Sign::Positive),
            Expr::Sym(name) => positives.contains(name).then_some(Sign::Positive),
            Expr::Exp(_) => Some(Sign::Positive),
            Expr::Pow(base, _) => match base.sign(positives)? {
                Sign::Positive => Some(Sign::Positive),
                _ => None,
            },
            Expr::Mul(factors) => {
                let mut negative_count = 0usize;
                for factor in factors {
                    match factor.sign(positives)? {
                        Sign::Positive => {}
                        Sign::Negative => negative_count += 1,
                        Sign::Zero => return Some(Sign::Zero),
                    }
                }
                if negative_count % 2 == 0 {
                    Some(Sign::Positive)
                } else {
                    Some(Sign::Negative)
                }
            }
            Expr::Add(terms) => {
                let mut positives_seen = 0usize;
                let mut negatives_seen = 0usize;
                for term in terms {
                    match term.sign(positives)? {
                        Sign::Positive => positives_seen += 1,
                        Sign::Negative => negatives_seen += 1,
                        Sign::Zero => {}
                    }
                }
                match (positives_seen, negatives_seen) {
                    (0, 0) => Some(Sign::Zero),
                    (_, 0) => Some(Sign::Positive),
                    (0, _) => Some(Sign::Negative),
                    _ => None,
                }
            }
            Expr::Log(_) => None,
        }
    }

    fn without_leading_sign(&self) -> Expr {
        match self {
            Expr::Num(value) => Expr::Num(Rational::new(-value.num, value.den)),
            Expr::Mul(factors) => {
                if let Some(Expr::Num(value)) = factors.first() {
                    let negated = Rational::new(-value.num, value.den);
                    let mut rest: Vec<Expr> = factors[1..].to_vec();
                    if !negated.is_one() {
                        rest.insert(0, Expr::Num(negated));
                    }
                    match rest.len() {
                        0 => Expr::int(1),
                        1 => rest.remove(0),
                        _ => Expr::Mul(rest),
                    }
                } else {
                    self.clone()
                }
            }
            other => other.clone(),
        }
    }

    fn is_negative_literal(&self) -> bool {
        match self {
            Expr::Num(value) => value.num < 0,
            Expr::Mul(factors) => factors.first().is_some_and(Expr::is_negative_literal),
            _ => false,
        }
    }

    fn fmt_atom(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(_) | Expr::Sym(_) | Expr::Pi | Expr::Exp(_) | Expr::Log(_) => {
                write!(f, "{self}")
            }
            _ => write!(f, "({self})"),
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(vec![self, rhs])
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Add(vec![self, -rhs])
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(vec![self, rhs])
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Mul(vec![Expr::int(-1), self])
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(value) => write!(f, "{value}"),
            Expr::Sym(name) => write!(f, "{name}"),
            Expr::Pi => write!(f, "pi"),
            Expr::Add(terms) => {
                for (idx, term) in terms.iter().enumerate() {
                    if idx == 0 {
                        write!(f, "{term}")?;
                    } else if term.is_negative_literal() {
                        write!(f, " - {}", term.without_leading_sign())?;
                    } else {
                        write!(f, " + {term}")?;
                    }
                }
                Ok(())
            }
            Expr::Mul(factors) => {
                let mut rest = factors.as_slice();
                if let Some(Expr::Num(value)) = factors.first() {
                    if value.num == -1 && value.den == 1 && factors.len() > 1 {
                        write!(f, "-")?;
                        rest = &factors[1..];
                    }
                }
                for (idx, factor) in rest.iter().enumerate() {
                    if idx > 0 {
                        write!(f, "*")?;
                    }
                    match factor {
                        Expr::Add(_) => factor.fmt_atom(f)?,
                        _ => write!(f, "{factor}")?,
                    }
                }
                Ok(())
            }
            Expr::Pow(base, exponent) => {
                base.fmt_atom(f)?;
                write!(f, "**")?;
                match exponent.as_ref() {
                    Expr::Num(value) if value.num >= 0 && value.den == 1 => {
                        write!(f, "{value}")
                    }
                    Expr::Sym(name) => write!(f, "{name}"),
                    other => write!(f, "({other})"),
                }
            }
            Expr::Exp(inner) => write!(f, "exp({inner})"),
            Expr::Log(inner) => write!(f, "log({inner})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positives(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn power_rule_derivative() {
        let cubed = Expr::sym("x").pow(Expr::int(3));
        let derivative = cubed.diff("x").simplify();
        assert_eq!(derivative.to_string(), "3*x**2");
    }

    #[test]
    fn constant_folding() {
        let sum = (Expr::int(2) + Expr::int(3)) * Expr::sym("x");
        assert_eq!(sum.simplify().to_string(), "5*x");
        let power = Expr::int(2).pow(Expr::int(3));
        assert_eq!(power.simplify(), Expr::int(8));
    }

    #[test]
    fn log_of_exp_cancels() {
        let nested = Expr::log_of(Expr::exp_of(Expr::sym("x")));
        assert_eq!(nested.simplify(), Expr::sym("x"));
    }

    #[test]
    fn negated_positive_symbol_is_negative() {
        let expr = (-Expr::sym("x")).simplify();
        assert_eq!(expr.sign(&positives(&["x"])), Some(Sign::Negative));
        assert_eq!(Expr::sym("y").sign(&positives(&["x"])), None);
    }

    #[test]
    fn substitution_replaces_symbols() {
        let expr = Expr::sym("a") * Expr::sym("b");
        let substituted = expr.subs("b", &Expr::int(0)).simplify();
        assert_eq!(substituted, Expr::int(0));
    }

    #[test]
    fn rational_normalization() {
        assert_eq!(Rational::new(2, 4), Rational::new(1, 2));
        assert_eq!(Rational::new(1, -2), Rational::new(-1, 2));
        assert_eq!(Rational::new(-6, 3).to_string(), "-2");
    }

    #[test]
    #[should_panic(expected = "denominator must be non-zero")]
    fn zero_denominator_violates_the_constructor_contract() {
        let _ = Rational::new(1, 0);
    }
}
