//! Quadrature options and results.

use hiquad_decimal::{Decimal, Precision};

use crate::QuadratureError;

/// Knobs shared by `quad` and `quadts`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadOptions {
    /// Digits carried beyond the requested precision while integrating.
    pub guard_digits: usize,
    /// Degree `m` of the Gauss-Legendre panel rule (`3·2^(m−1)` points).
    /// The error of a panel is estimated against degree `m − 1`.
    pub panel_degree: u32,
    /// Maximum number of panel bisections in `quad`.
    pub max_subdivisions: usize,
    /// Maximum number of step halvings in `quadts`.
    pub max_level: u32,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            guard_digits: 10,
            panel_degree: 5,
            max_subdivisions: 1000,
            max_level: 10,
        }
    }
}

impl QuadOptions {
    /// Sets the number of guard digits.
    #[must_use]
    pub fn with_guard_digits(mut self, guard_digits: usize) -> Self {
        self.guard_digits = guard_digits;
        self
    }

    /// Sets the Gauss-Legendre panel degree.
    #[must_use]
    pub fn with_panel_degree(mut self, panel_degree: u32) -> Self {
        self.panel_degree = panel_degree;
        self
    }

    /// Sets the bisection budget of `quad`.
    #[must_use]
    pub fn with_max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.max_subdivisions = max_subdivisions;
        self
    }

    /// Sets the level budget of `quadts`.
    #[must_use]
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Checks that the options describe a usable quadrature.
    ///
    /// # Errors
    ///
    /// Returns `QuadratureError::InvalidOptions` naming the offending field.
    pub fn validate(&self) -> Result<(), QuadratureError> {
        if self.panel_degree < 2 {
            return Err(QuadratureError::InvalidOptions(
                "panel_degree must be at least 2",
            ));
        }
        if self.panel_degree > 16 {
            return Err(QuadratureError::InvalidOptions(
                "panel_degree must be at most 16",
            ));
        }
        if self.max_subdivisions == 0 {
            return Err(QuadratureError::InvalidOptions(
                "max_subdivisions must be positive",
            ));
        }
        if self.max_level == 0 || self.max_level > 30 {
            return Err(QuadratureError::InvalidOptions(
                "max_level must be between 1 and 30",
            ));
        }
        Ok(())
    }
}

/// Result of a quadrature.
#[derive(Clone, Debug)]
pub struct QuadResult {
    /// Integral value, rounded to the requested precision
    pub value: Decimal,
    /// Estimated absolute error
    pub error: Decimal,
    /// Total number of integrand evaluations
    pub evaluations: usize,
    /// Whether the error estimate met the tolerance
    pub converged: bool,
}

impl QuadResult {
    /// The integral over an empty interval.
    pub(crate) fn zero(precision: &Precision) -> Self {
        Self {
            value: precision.int(0),
            error: precision.int(0),
            evaluations: 0,
            converged: true,
        }
    }

    /// The same result for the reversed interval.
    pub(crate) fn negate(self) -> Self {
        Self {
            value: -self.value,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(QuadOptions::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_low_panel_degree() {
        let options = QuadOptions::default().with_panel_degree(1);
        assert!(matches!(
            options.validate(),
            Err(QuadratureError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_rejects_zero_budgets() {
        assert!(QuadOptions::default().with_max_subdivisions(0).validate().is_err());
        assert!(QuadOptions::default().with_max_level(0).validate().is_err());
    }

    #[test]
    fn test_negate() {
        let p = Precision::new(10).unwrap();
        let r = QuadResult {
            value: p.int(3),
            error: p.int(0),
            evaluations: 7,
            converged: true,
        };
        let n = r.negate();
        assert_eq!(n.value, p.int(-3));
        assert_eq!(n.evaluations, 7);
    }
}
