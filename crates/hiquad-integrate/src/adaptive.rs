//! Adaptive Numerical Integration
//!
//! Implements adaptive subdivision using pairs of Gauss-Legendre rules for
//! automatic error control.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hiquad_decimal::{abs, Decimal, DecimalError, Precision};
use tracing::{debug, trace};

use crate::gauss_legendre::GaussLegendreRule;

/// Result of adaptive integration.
#[derive(Clone, Debug)]
pub struct AdaptiveResult {
    /// Computed integral value
    pub value: Decimal,
    /// Estimated absolute error
    pub error: Decimal,
    /// Total number of function evaluations
    pub evaluations: usize,
    /// Number of subintervals used
    pub intervals: usize,
    /// Whether convergence was achieved
    pub converged: bool,
}

/// Two Gauss-Legendre rules of consecutive degree.
///
/// The higher rule gives the panel value; its distance to the lower rule is
/// the panel's error estimate.
#[derive(Clone, Debug)]
pub struct PanelRule {
    high: GaussLegendreRule,
    low: GaussLegendreRule,
}

/// Value and error estimate of one panel.
#[derive(Clone, Debug)]
pub struct PanelEstimate {
    /// Value from the higher-degree rule
    pub value: Decimal,
    /// |high − low|
    pub error: Decimal,
    /// Number of function evaluations
    pub evaluations: usize,
}

impl PanelRule {
    /// Creates the pair of degrees `degree` and `degree − 1`.
    ///
    /// # Errors
    ///
    /// See [`GaussLegendreRule::new`].
    ///
    /// # Panics
    ///
    /// Panics if `degree < 2`.
    pub fn new(precision: &Precision, degree: u32) -> Result<Self, DecimalError> {
        assert!(degree >= 2, "panel rule needs degree of at least 2");
        Ok(Self {
            high: GaussLegendreRule::degree(precision, degree)?,
            low: GaussLegendreRule::degree(precision, degree - 1)?,
        })
    }

    /// Integrates `f` over `[a, b]` with both rules.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `f`.
    pub fn estimate<F>(
        &self,
        f: &F,
        precision: &Precision,
        a: &Decimal,
        b: &Decimal,
    ) -> Result<PanelEstimate, DecimalError>
    where
        F: Fn(&Precision, &Decimal) -> Result<Decimal, DecimalError>,
    {
        let value = self.high.integrate(f, precision, a, b)?;
        let coarse = self.low.integrate(f, precision, a, b)?;
        let error = abs(&(&value - &coarse));
        Ok(PanelEstimate {
            value,
            error,
            evaluations: self.high.points() + self.low.points(),
        })
    }
}

/// An interval with its contribution and error estimate.
#[derive(Clone, Debug)]
struct Interval {
    a: Decimal,
    b: Decimal,
    value: Decimal,
    error: Decimal,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error
    }
}

impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap by error (largest error first)
        self.error
            .partial_cmp(&other.error)
            .unwrap_or(Ordering::Equal)
    }
}

/// Tolerance `max(abs_tol, rel_tol·|value|)`.
fn tolerance(abs_tol: &Decimal, rel_tol: &Decimal, value: &Decimal) -> Decimal {
    let relative = rel_tol * &abs(value);
    if relative > *abs_tol {
        relative
    } else {
        abs_tol.clone()
    }
}

/// Performs adaptive integration using a Gauss-Legendre panel rule.
///
/// This function subdivides the integration interval adaptively,
/// focusing computational effort on regions with larger errors.
///
/// # Arguments
///
/// * `f` - The function to integrate
/// * `precision` - Working precision passed to `f` and used for all sums
/// * `rule` - Panel rule pair
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `abs_tol` - Absolute error tolerance
/// * `rel_tol` - Relative error tolerance
/// * `max_subdivisions` - Maximum number of bisections
///
/// # Errors
///
/// Returns the first error reported by `f`.
#[allow(clippy::too_many_arguments)]
pub fn adaptive_integrate<F>(
    f: &F,
    precision: &Precision,
    rule: &PanelRule,
    a: &Decimal,
    b: &Decimal,
    abs_tol: &Decimal,
    rel_tol: &Decimal,
    max_subdivisions: usize,
) -> Result<AdaptiveResult, DecimalError>
where
    F: Fn(&Precision, &Decimal) -> Result<Decimal, DecimalError>,
{
    let two = precision.int(2);

    // Priority queue ordered by error (largest first)
    let mut heap: BinaryHeap<Interval> = BinaryHeap::new();

    let initial = rule.estimate(f, precision, a, b)?;
    let mut total_value = initial.value.clone();
    let mut total_error = initial.error.clone();
    let mut total_evaluations = initial.evaluations;
    heap.push(Interval {
        a: a.clone(),
        b: b.clone(),
        value: initial.value,
        error: initial.error,
    });

    let mut converged = total_error <= tolerance(abs_tol, rel_tol, &total_value);
    let mut iterations = 0;
    while !converged && iterations < max_subdivisions {
        iterations += 1;

        let Some(interval) = heap.pop() else {
            break;
        };

        // Remove its contribution from totals
        total_value = &total_value - &interval.value;
        total_error = &total_error - &interval.error;

        let mid = &(&interval.a + &interval.b) / &two;
        let left = rule.estimate(f, precision, &interval.a, &mid)?;
        let right = rule.estimate(f, precision, &mid, &interval.b)?;
        total_evaluations += left.evaluations + right.evaluations;

        total_value = &total_value + &(&left.value + &right.value);
        total_error = &total_error + &(&left.error + &right.error);
        trace!(iterations, mid = %mid, error = %total_error, "bisected panel");

        heap.push(Interval {
            a: interval.a,
            b: mid.clone(),
            value: left.value,
            error: left.error,
        });
        heap.push(Interval {
            a: mid,
            b: interval.b,
            value: right.value,
            error: right.error,
        });

        converged = total_error <= tolerance(abs_tol, rel_tol, &total_value);
    }

    // Resum left to right so the value does not depend on the heap layout.
    let mut panels = heap.into_vec();
    panels.sort_by(|x, y| x.a.partial_cmp(&y.a).unwrap_or(Ordering::Equal));
    let mut value = precision.int(0);
    let mut error = precision.int(0);
    for panel in &panels {
        value = &value + &panel.value;
        error = &error + &panel.error;
    }

    debug!(
        intervals = panels.len(),
        evaluations = total_evaluations,
        converged,
        "adaptive integration finished"
    );

    Ok(AdaptiveResult {
        value,
        error,
        evaluations: total_evaluations,
        intervals: panels.len(),
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p40() -> Precision {
        Precision::new(40).unwrap()
    }

    fn run<F>(f: &F, a: &Decimal, b: &Decimal) -> AdaptiveResult
    where
        F: Fn(&Precision, &Decimal) -> Result<Decimal, DecimalError>,
    {
        let p = p40();
        let rule = PanelRule::new(&p, 5).unwrap();
        let tol = p.pow10(-35);
        adaptive_integrate(f, &p, &rule, a, b, &tol, &tol, 200).unwrap()
    }

    #[test]
    fn test_adaptive_polynomial() {
        // ∫₀¹ x³ dx = 1/4
        let p = p40();
        let result = run(&|p: &Precision, x: &Decimal| p.powi(x, 3), &p.int(0), &p.int(1));
        assert!(result.converged);
        assert_eq!(result.intervals, 1);
        assert!(abs(&(&result.value - &p.ratio(1, 4).unwrap())) < p.pow10(-36));
    }

    #[test]
    fn test_adaptive_oscillatory() {
        // ∫₀^10 sin(10x) dx = (1 − cos(100))/10
        let p = p40();
        let f = |p: &Precision, x: &Decimal| p.sin(&(&p.int(10) * x));
        let result = run(&f, &p.int(0), &p.int(10));
        let expected = &(&p.int(1) - &p.cos(&p.int(100)).unwrap()) / &p.int(10);
        assert!(result.converged);
        assert!(result.intervals > 1);
        assert!(abs(&(&result.value - &expected)) < p.pow10(-34));
    }

    #[test]
    fn test_adaptive_budget_exhausted() {
        // Two bisections cannot resolve sin(50x) on [0, 10].
        let p = p40();
        let rule = PanelRule::new(&p, 2).unwrap();
        let tol = p.pow10(-35);
        let f = |p: &Precision, x: &Decimal| p.sin(&(&p.int(50) * x));
        let result = adaptive_integrate(&f, &p, &rule, &p.int(0), &p.int(10), &tol, &tol, 2).unwrap();
        assert!(!result.converged);
        assert_eq!(result.intervals, 3);
    }

    #[test]
    fn test_adaptive_error_propagates() {
        let p = p40();
        let f = |p: &Precision, x: &Decimal| -> Result<Decimal, DecimalError> {
            if *x > p.ratio(9, 10)? {
                p.recip(&p.int(0))
            } else {
                Ok(x.clone())
            }
        };
        let rule = PanelRule::new(&p, 2).unwrap();
        let tol = p.pow10(-35);
        let result = adaptive_integrate(&f, &p, &rule, &p.int(0), &p.int(1), &tol, &tol, 10);
        assert!(matches!(result, Err(DecimalError::DivisionByZero)));
    }
}
