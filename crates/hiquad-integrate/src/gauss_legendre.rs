//! Gauss-Legendre Quadrature Rules
//!
//! Nodes and weights are computed at the requested precision rather than
//! read from tables: each node is a root of the Legendre polynomial `Pₙ`,
//! found by Newton iteration from the asymptotic guess
//! `cos(π(i − ¼)/(n + ½))`, and its weight is `2 / ((1 − x²) Pₙ′(x)²)`.
//!
//! Rules are indexed by degree `m`, with `3·2^(m−1)` points, so that each
//! degree roughly doubles the accuracy of the previous one on smooth
//! integrands.

use hiquad_decimal::{abs, Decimal, DecimalError, Precision};
use tracing::trace;

/// Newton iterations allowed per node.
const MAX_NEWTON_STEPS: usize = 100;

/// Gauss-Legendre rule on [-1, 1].
///
/// Only the positive half of the symmetric node set is stored.
#[derive(Clone, Debug)]
pub struct GaussLegendreRule {
    /// Positive nodes
    nodes: Vec<Decimal>,
    /// Weights of `±nodes[i]`
    weights: Vec<Decimal>,
    /// Weight of the node at 0 (odd point counts only)
    center_weight: Option<Decimal>,
    points: usize,
}

impl GaussLegendreRule {
    /// Creates the `points`-point rule at `precision`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the elementary functions used for the initial
    /// guesses; none occur for `points ≥ 1`.
    ///
    /// # Panics
    ///
    /// Panics if `points` is zero.
    pub fn new(precision: &Precision, points: usize) -> Result<Self, DecimalError> {
        assert!(points > 0, "a Gauss-Legendre rule needs at least one point");
        trace!(points, digits = precision.digits(), "building Gauss-Legendre rule");

        let n = points as i64;
        let one = precision.int(1);
        let two = precision.int(2);
        let tolerance = precision.pow10(-(precision.digits() as isize));
        let pi = precision.pi();

        let mut nodes = Vec::with_capacity(points / 2);
        let mut weights = Vec::with_capacity(points / 2);

        for i in 1..=(points / 2) as i64 {
            let angle = &(&pi * &precision.int(4 * i - 1)) / &precision.int(4 * n + 2);
            let mut x = precision.cos(&angle)?;

            for _ in 0..MAX_NEWTON_STEPS {
                let (p, dp) = legendre(precision, points, &x);
                let step = &p / &dp;
                x = &x - &step;
                if abs(&step) <= tolerance {
                    break;
                }
            }

            let (_, dp) = legendre(precision, points, &x);
            let one_minus_x2 = &one - &(&x * &x);
            weights.push(&two / &(&one_minus_x2 * &(&dp * &dp)));
            nodes.push(x);
        }

        let center_weight = if points % 2 == 1 {
            let (_, dp) = legendre(precision, points, &precision.int(0));
            Some(&two / &(&dp * &dp))
        } else {
            None
        };

        Ok(Self {
            nodes,
            weights,
            center_weight,
            points,
        })
    }

    /// Creates the degree-`m` rule with `3·2^(m−1)` points.
    ///
    /// # Errors
    ///
    /// See [`GaussLegendreRule::new`].
    pub fn degree(precision: &Precision, m: u32) -> Result<Self, DecimalError> {
        Self::new(precision, 3 << m.saturating_sub(1))
    }

    /// Number of points (and integrand evaluations per panel).
    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Positive nodes, in descending order.
    #[must_use]
    pub fn nodes(&self) -> &[Decimal] {
        &self.nodes
    }

    /// Integrates `f` over `[a, b]` with this rule.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `f`.
    pub fn integrate<F>(
        &self,
        f: &F,
        precision: &Precision,
        a: &Decimal,
        b: &Decimal,
    ) -> Result<Decimal, DecimalError>
    where
        F: Fn(&Precision, &Decimal) -> Result<Decimal, DecimalError>,
    {
        let two = precision.int(2);
        let mid = &(a + b) / &two;
        let half_length = &(b - a) / &two;

        let mut sum = precision.int(0);

        if let Some(w) = &self.center_weight {
            sum = &sum + &(w * &f(precision, &mid)?);
        }

        for (x, w) in self.nodes.iter().zip(&self.weights) {
            let dx = &half_length * x;
            let f_left = f(precision, &(&mid - &dx))?;
            let f_right = f(precision, &(&mid + &dx))?;
            sum = &sum + &(w * &(&f_left + &f_right));
        }

        Ok(&half_length * &sum)
    }
}

/// Evaluates `(Pₙ(x), Pₙ′(x))` by the three-term recurrence.
fn legendre(precision: &Precision, n: usize, x: &Decimal) -> (Decimal, Decimal) {
    let one = precision.int(1);
    let mut p_prev = one.clone();
    let mut p = x.clone();

    for k in 2..=n as i64 {
        let next = &(&(&precision.int(2 * k - 1) * &(x * &p)) - &(&precision.int(k - 1) * &p_prev))
            / &precision.int(k);
        p_prev = p;
        p = next;
    }

    // Pₙ′(x) = n (x Pₙ − Pₙ₋₁) / (x² − 1)
    let dp = &(&precision.int(n as i64) * &(&(x * &p) - &p_prev)) / &(&(x * x) - &one);
    (p, dp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiquad_decimal::is_zero;

    fn p40() -> Precision {
        Precision::new(40).unwrap()
    }

    fn monomial(k: i32) -> impl Fn(&Precision, &Decimal) -> Result<Decimal, DecimalError> {
        move |p, x| p.powi(x, k)
    }

    #[test]
    fn test_degree_point_counts() {
        let p = Precision::new(20).unwrap();
        assert_eq!(GaussLegendreRule::degree(&p, 1).unwrap().points(), 3);
        assert_eq!(GaussLegendreRule::degree(&p, 3).unwrap().points(), 12);
    }

    #[test]
    fn test_weights_sum_to_two() {
        let p = p40();
        let rule = GaussLegendreRule::new(&p, 7).unwrap();
        let mut total = rule.center_weight.clone().unwrap();
        for w in &rule.weights {
            total = &total + &(&p.int(2) * w);
        }
        assert!(abs(&(&total - &p.int(2))) < p.pow10(-37));
    }

    #[test]
    fn test_three_point_nodes() {
        // P₃ roots: 0, ±√(3/5)
        let p = p40();
        let rule = GaussLegendreRule::new(&p, 3).unwrap();
        let x = &rule.nodes()[0];
        let diff = &(x * x) - &p.ratio(3, 5).unwrap();
        assert!(abs(&diff) < p.pow10(-38));
        let center = rule.center_weight.clone().unwrap();
        assert!(abs(&(&center - &p.ratio(8, 9).unwrap())) < p.pow10(-38));
    }

    #[test]
    fn test_exact_for_polynomials() {
        // 6 points integrate degree ≤ 11 exactly: ∫₀¹ x¹¹ dx = 1/12
        let p = p40();
        let rule = GaussLegendreRule::new(&p, 6).unwrap();
        let value = rule
            .integrate(&monomial(11), &p, &p.int(0), &p.int(1))
            .unwrap();
        assert!(abs(&(&value - &p.ratio(1, 12).unwrap())) < p.pow10(-36));
    }

    #[test]
    fn test_odd_function_vanishes() {
        let p = p40();
        let rule = GaussLegendreRule::new(&p, 12).unwrap();
        let value = rule
            .integrate(&monomial(5), &p, &p.int(-1), &p.int(1))
            .unwrap();
        assert!(is_zero(&value) || abs(&value) < p.pow10(-38));
    }

    #[test]
    fn test_sine_high_degree() {
        // ∫₀^π sin(x) dx = 2
        let p = p40();
        let rule = GaussLegendreRule::degree(&p, 4).unwrap();
        let value = rule
            .integrate(&|p: &Precision, x: &Decimal| p.sin(x), &p, &p.int(0), &p.pi())
            .unwrap();
        assert!(abs(&(&value - &p.int(2))) < p.pow10(-35));
    }

    #[test]
    fn test_integrand_error_propagates() {
        // 3-point rule samples the midpoint.
        let p = p40();
        let rule = GaussLegendreRule::new(&p, 3).unwrap();
        let result = rule.integrate(&|p: &Precision, x: &Decimal| p.recip(x), &p, &p.int(-1), &p.int(1));
        assert_eq!(result, Err(DecimalError::DivisionByZero));
    }
}
