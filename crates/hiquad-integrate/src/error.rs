//! Errors raised by the quadrature routines.

use hiquad_decimal::DecimalError;
use thiserror::Error;

/// Errors that can occur during numerical integration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuadratureError {
    /// The integrand (or the construction of a rule) failed to evaluate.
    #[error("integrand evaluation failed: {0}")]
    Integrand(#[from] DecimalError),

    /// The options cannot drive a quadrature.
    #[error("invalid quadrature options: {0}")]
    InvalidOptions(&'static str),
}
