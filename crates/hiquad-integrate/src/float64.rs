//! Machine-precision baseline rules.
//!
//! Plain `f64` versions of the two classical methods, kept as a baseline for
//! the arbitrary precision routines: composite Simpson and the 21-point
//! Gauss-Kronrod pair (10-point Gauss embedded in a 21-point Kronrod rule).
//! Neither can get closer to an exact value than `f64` rounding allows,
//! roughly 15 significant digits.

use crate::QuadratureError;

/// Gauss-Kronrod quadrature rule with pre-computed nodes and weights.
#[derive(Clone, Debug)]
pub struct GaussKronrodRule {
    /// Kronrod nodes, center first, then the positive half in ascending order
    pub kronrod_nodes: Vec<f64>,
    /// Kronrod weights
    pub kronrod_weights: Vec<f64>,
    /// Indices of Gauss nodes within Kronrod nodes
    pub gauss_indices: Vec<usize>,
    /// Gauss weights
    pub gauss_weights: Vec<f64>,
}

/// Result of Gauss-Kronrod integration.
#[derive(Clone, Debug)]
pub struct GKResult {
    /// Computed integral value (from Kronrod rule)
    pub value: f64,
    /// Error estimate (difference between Gauss and Kronrod)
    pub error: f64,
    /// Number of function evaluations
    pub evaluations: usize,
}

impl GaussKronrodRule {
    /// Creates the G10K21 rule (10-point Gauss, 21-point Kronrod).
    pub fn g10k21() -> Self {
        let kronrod_nodes = vec![
            0.0,
            0.148874338981631210884826001129720,
            0.294392862701460198131126603103866,
            0.433395394129247190799265943165784,
            0.562757134668604683339000099272694,
            0.679409568299024406234327365114874,
            0.780817726586416897063717578345042,
            0.865063366688984510732096688423493,
            0.930157491355708226001207180059508,
            0.973906528517171720077964012084452,
            0.995657163025808080735527280689003,
        ];

        let kronrod_weights = vec![
            0.149445554002916905664936468389821,
            0.147739104901338491374841515972068,
            0.142775938577060080797094273138717,
            0.134709217311473325928054001771707,
            0.123491976262065851077482534265322,
            0.109387158802297641899210590325805,
            0.093125454583697605535065465083366,
            0.075039674810919952767043140916190,
            0.054755896574351996031381300244580,
            0.032558162307964727478818972459390,
            0.011694638867371874278064396062192,
        ];

        // The 10-point Gauss rule has no center node
        let gauss_indices = vec![1, 3, 5, 7, 9];

        let gauss_weights = vec![
            0.295524224714752870173892994651338,
            0.269266719309996355091226921569469,
            0.219086362515982043995534934228163,
            0.149451349150580593145776339657697,
            0.066671344308688137593568809893332,
        ];

        Self {
            kronrod_nodes,
            kronrod_weights,
            gauss_indices,
            gauss_weights,
        }
    }

    /// Integrates a function over [a, b].
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: &F, a: f64, b: f64) -> GKResult {
        let mid = (a + b) / 2.0;
        let half_length = (b - a) / 2.0;

        let f_center = f(mid);
        let mut kronrod_sum = self.kronrod_weights[0] * f_center;
        let mut gauss_sum = match self.gauss_indices.iter().position(|&idx| idx == 0) {
            Some(pos) => self.gauss_weights[pos] * f_center,
            None => 0.0,
        };
        let mut evaluations = 1;

        for i in 1..self.kronrod_nodes.len() {
            let dx = half_length * self.kronrod_nodes[i];
            let f_sum = f(mid - dx) + f(mid + dx);
            evaluations += 2;

            kronrod_sum += self.kronrod_weights[i] * f_sum;
            if let Some(pos) = self.gauss_indices.iter().position(|&idx| idx == i) {
                gauss_sum += self.gauss_weights[pos] * f_sum;
            }
        }

        let value = half_length * kronrod_sum;
        let error = (value - half_length * gauss_sum).abs();

        GKResult {
            value,
            error,
            evaluations,
        }
    }
}

/// Convenience function for integration with the G10K21 rule.
pub fn gauss_kronrod21<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> GKResult {
    GaussKronrodRule::g10k21().integrate(f, a, b)
}

/// Composite Simpson rule with `n` subintervals.
///
/// # Errors
///
/// Returns `QuadratureError::InvalidOptions` unless `n` is even and positive.
pub fn simpson<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> {
    if n == 0 || n % 2 == 1 {
        return Err(QuadratureError::InvalidOptions(
            "Simpson's rule needs an even, positive number of subintervals",
        ));
    }

    let h = (b - a) / n as f64;
    let mut odd = 0.0;
    let mut even = 0.0;
    for i in 1..n {
        let y = f(a + i as f64 * h);
        if i % 2 == 1 {
            odd += y;
        } else {
            even += y;
        }
    }

    Ok(h / 3.0 * (f(a) + 4.0 * odd + 2.0 * even + f(b)))
}
