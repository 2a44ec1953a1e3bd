//! Tanh-Sinh (double-exponential) quadrature.
//!
//! The substitution `x = tanh(π/2 · sinh t)` maps `[−1, 1]` onto the real
//! line and makes the transformed integrand decay double-exponentially, so
//! the plain trapezoid rule in `t` converges very quickly. Each level halves
//! the step `h = 2^(−k)`; level `k > 1` only adds the odd multiples of `h`,
//! reusing every earlier evaluation.
//!
//! Nodes are stored by their distance to the endpoint, `1 − |x|`, which keeps
//! full relative precision where the abscissae crowd against ±1.

use hiquad_decimal::{abs, is_zero, to_f64, Decimal, DecimalError, Precision};
use tracing::{debug, trace};

/// One symmetric pair of nodes.
#[derive(Clone, Debug)]
struct Node {
    /// `1 − tanh(π/2 · sinh t)`
    complement: Decimal,
    /// `π/2 · cosh t / cosh²(π/2 · sinh t)`
    weight: Decimal,
}

/// Cached tanh-sinh nodes at one precision.
#[derive(Clone, Debug)]
pub struct TanhSinhRule {
    precision: Precision,
    half_pi: Decimal,
    levels: Vec<Vec<Node>>,
}

/// Result of tanh-sinh integration.
#[derive(Clone, Debug)]
pub struct TanhSinhResult {
    /// Estimate from the last level
    pub value: Decimal,
    /// Estimated absolute error
    pub error: Decimal,
    /// Total number of function evaluations
    pub evaluations: usize,
    /// Number of levels summed
    pub levels: u32,
    /// Whether convergence was achieved
    pub converged: bool,
}

impl TanhSinhRule {
    /// Creates an empty rule; levels are generated on first use.
    #[must_use]
    pub fn new(precision: &Precision) -> Self {
        Self {
            precision: *precision,
            half_pi: &precision.pi() / &precision.int(2),
            levels: Vec::new(),
        }
    }

    /// Number of node pairs on level `k` (1-based), generating it if needed.
    pub fn level_len(&mut self, k: u32) -> usize {
        self.level(k).len()
    }

    fn level(&mut self, k: u32) -> &[Node] {
        while self.levels.len() < k as usize {
            let next = self.levels.len() as u32 + 1;
            let nodes = self.build_level(next);
            trace!(level = next, nodes = nodes.len(), "generated tanh-sinh level");
            self.levels.push(nodes);
        }
        &self.levels[k as usize - 1]
    }

    /// Abscissae `t = j·2^(−k)` for `j ≥ 1` (level 1) or odd `j` (deeper
    /// levels), up to the first node that rounds onto the endpoint.
    fn build_level(&self, k: u32) -> Vec<Node> {
        let p = &self.precision;
        let one = p.int(1);
        let two = p.int(2);
        let h = &one / &p.int(1i64 << k);
        let eps = p.pow10(-(p.digits() as isize));
        let stride = if k == 1 { 1 } else { 2 };

        let mut nodes = Vec::new();
        let mut j = 1i64;
        loop {
            let t = &h * &p.int(j);
            let e_t = p.exp(&t);
            let e_t_inv = &one / &e_t;
            let sinh_t = &(&e_t - &e_t_inv) / &two;
            let cosh_t = &(&e_t + &e_t_inv) / &two;

            let u = &self.half_pi * &sinh_t;
            let e_u = p.exp(&u);
            let e_u_inv = &one / &e_u;
            // 1 − tanh u = 2 / (e^(2u) + 1)
            let complement = &two / &(&(&e_u * &e_u) + &one);
            if complement < eps {
                break;
            }
            let cosh_u = &(&e_u + &e_u_inv) / &two;
            let weight = &(&self.half_pi * &cosh_t) / &(&cosh_u * &cosh_u);

            nodes.push(Node { complement, weight });
            j += stride;
        }
        nodes
    }

    /// Integrates `f` over `[a, b]`, summing levels until the error estimate
    /// drops below `tolerance` or `max_level` is reached.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `f`.
    pub fn integrate<F>(
        &mut self,
        f: &F,
        a: &Decimal,
        b: &Decimal,
        tolerance: &Decimal,
        max_level: u32,
    ) -> Result<TanhSinhResult, DecimalError>
    where
        F: Fn(&Precision, &Decimal) -> Result<Decimal, DecimalError>,
    {
        let p = self.precision;
        let two = p.int(2);
        let mid = &(a + b) / &two;
        let half_length = &(b - a) / &two;

        // Trapezoid sum over every node seen so far, without the step factor.
        let mut sum = &self.half_pi * &f(&p, &mid)?;
        let mut evaluations = 1;
        let mut results: Vec<Decimal> = Vec::new();
        let mut error = p.int(1);
        let mut converged = false;
        let mut level = 0;

        while level < max_level {
            level += 1;
            let nodes = self.level(level);
            for node in nodes {
                let offset = &half_length * &node.complement;
                let f_right = f(&p, &(b - &offset))?;
                let f_left = f(&p, &(a + &offset))?;
                sum = &sum + &(&node.weight * &(&f_left + &f_right));
            }
            evaluations += 2 * nodes.len();

            let h = &p.int(1) / &p.int(1i64 << level);
            results.push(&(&half_length * &h) * &sum);

            if results.len() >= 2 {
                error = estimate_error(&p, &results);
                debug!(level, error = %error, "tanh-sinh level summed");
                if error <= *tolerance {
                    converged = true;
                    break;
                }
            }
        }

        let value = results.pop().unwrap_or_else(|| p.int(0));
        Ok(TanhSinhResult {
            value,
            error,
            evaluations,
            levels: level,
            converged,
        })
    }
}

/// Extrapolated error of the last level.
///
/// Tanh-sinh roughly doubles the number of correct digits per level, so with
/// `D₁ = log₁₀|Iₖ − Iₖ₋₁|` and `D₂ = log₁₀|Iₖ − Iₖ₋₂|` the error of `Iₖ` is
/// about `10^(D₁²/D₂)`, clamped to `[10^(−digits), 1]` and never below
/// `10^(2·D₁)`.
fn estimate_error(precision: &Precision, results: &[Decimal]) -> Decimal {
    let n = results.len();
    let last = &results[n - 1];
    let diff1 = abs(&(last - &results[n - 2]));
    if n == 2 {
        return diff1;
    }
    let diff2 = abs(&(last - &results[n - 3]));
    if is_zero(&diff1) || is_zero(&diff2) {
        return if is_zero(&diff1) && is_zero(&diff2) {
            precision.int(0)
        } else {
            precision.epsilon()
        };
    }

    let d1 = to_f64(&diff1).log10();
    let d2 = to_f64(&diff2).log10();
    let d3 = -(precision.digits() as f64);
    let d4 = (d1 * d1 / d2).max(2.0 * d1).max(d3).min(0.0);
    precision.pow10(d4 as isize)
}
